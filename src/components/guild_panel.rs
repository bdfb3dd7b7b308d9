use leptos::prelude::*;

use crate::network::{Guild, GuildDraft, Network};

/// Guild creation form and the list of existing guilds.
#[component]
pub fn GuildPanel(network: RwSignal<Network>, guilds: Memo<Vec<Guild>>) -> impl IntoView {
	let draft = RwSignal::new(GuildDraft::default());

	let add = move |_| {
		let mut d = draft.get_untracked();
		let mut created = false;
		network.maybe_update(|n| {
			created = n.add_guild(&mut d).is_some();
			created
		});
		if created {
			draft.set(d);
		}
	};

	view! {
		<section class="card">
			<h2>"Guilds"</h2>
			<div class="row">
				<input
					type="text"
					placeholder="Guild name"
					prop:value=move || draft.with(|d| d.name.clone())
					on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
				/>
				<input
					type="color"
					title="Color"
					prop:value=move || draft.with(|d| d.color.clone())
					on:input=move |ev| draft.update(|d| d.color = event_target_value(&ev))
				/>
				<button on:click=add>"Add"</button>
			</div>
			<ul class="guild-list">
				{move || {
					guilds
						.get()
						.into_iter()
						.map(|g| {
							let id = g.id;
							view! {
								<li class="row">
									<span
										class="swatch"
										style=format!("background-color: {};", g.color)
									></span>
									<span>{g.name}</span>
									<button
										class="danger small"
										on:click=move |_| {
											network.update(|n| {
												n.remove_guild(id);
											})
										}
									>
										"Delete"
									</button>
								</li>
							}
						})
						.collect_view()
				}}
			</ul>
		</section>
	}
}
