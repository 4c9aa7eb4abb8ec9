/// Receives picked colors in the host's blue-green-red-alpha channel order
/// and applies them as the active drawing color.
pub trait ForegroundColorSink {
    fn set_foreground_color(&mut self, bgra: [f32; 4]);
}

/// Stand-in sink used when the panel runs outside a host paint application:
/// remembers the last color and logs it.
#[derive(Default)]
pub struct LoggingSink {
    pub current: Option<[f32; 4]>,
}

impl ForegroundColorSink for LoggingSink {
    fn set_foreground_color(&mut self, bgra: [f32; 4]) {
        tracing::info!(
            "foreground color set to BGRA [{:.3}, {:.3}, {:.3}, {:.3}]",
            bgra[0],
            bgra[1],
            bgra[2],
            bgra[3]
        );
        self.current = Some(bgra);
    }
}
