pub mod controls;
pub mod menu_bar;
pub mod status;
pub mod viewport;

use crate::app::RefviewApp;
use crate::messages::ShellEvent;
use crate::settings::{KEY_LAST_DIR, NAMESPACE};

/// Ask for an image path on a helper thread; the chosen path lands in the
/// app's event channel.
pub(crate) fn open_image_dialog(app: &RefviewApp) {
    let event_tx = app.event_tx.clone();
    let start_dir = app.settings.get(NAMESPACE, KEY_LAST_DIR);
    std::thread::spawn(move || {
        let mut dialog = rfd::FileDialog::new()
            .add_filter(
                "Images",
                &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"],
            )
            .add_filter("All files", &["*"]);
        if let Some(dir) = start_dir {
            dialog = dialog.set_directory(dir);
        }
        if let Some(path) = dialog.pick_file() {
            let _ = event_tx.send(ShellEvent::OpenPicked(path));
        }
    });
}
