use leptos::prelude::*;

use crate::components::character_form::CharacterForm;
use crate::components::character_list::CharacterList;
use crate::components::guild_panel::GuildPanel;
use crate::components::network_canvas::NetworkCanvas;
use crate::network::Network;

/// The network editor: character form, character cards, guilds and canvas.
#[component]
pub fn Home() -> impl IntoView {
	let network = RwSignal::new(Network::new());
	// Drags notify `network` on every mousemove but leave the revision alone,
	// so the lists below are only recomputed for entity edits.
	let revision = Memo::new(move |_| network.with(|n| n.revision()));
	let characters = Memo::new(move |_| {
		revision.track();
		network.with_untracked(|n| n.characters().to_vec())
	});
	let guilds = Memo::new(move |_| {
		revision.track();
		network.with_untracked(|n| n.guilds().to_vec())
	});

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"The network editor stopped"</h1>

				<p>"Reload the page to start a new network. Details:"</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="editor">
				<CharacterForm network=network guilds=guilds />
				<CharacterList network=network characters=characters guilds=guilds />
				<div class="column">
					<GuildPanel network=network guilds=guilds />
					<div class="canvas-frame">
						<NetworkCanvas network=network />
					</div>
					<p class="subtitle">
						"Drag a character or guild to move it, the background to pan, the wheel to zoom."
					</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
