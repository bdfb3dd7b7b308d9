//! Browser entry point: mounts the network editor.

use guild_network::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App)
}
