use leptos::prelude::*;
use log::error;
use web_sys::HtmlInputElement;

use super::upload::read_data_url;
use super::widgets::{GuildSelect, QualityRow};
use crate::network::{CharacterDraft, Guild, GuildId, Network};

/// Form that builds a [`CharacterDraft`] and adds it to the network.
#[component]
pub fn CharacterForm(network: RwSignal<Network>, guilds: Memo<Vec<Guild>>) -> impl IntoView {
	let draft = RwSignal::new(CharacterDraft::default());
	let new_quality = RwSignal::new(String::new());
	let file_ref = NodeRef::<leptos::html::Input>::new();
	let qualities = Memo::new(move |_| draft.with(|d| d.qualities.clone()));

	let on_image = move |ev: leptos::ev::Event| {
		let input: HtmlInputElement = event_target(&ev);
		let Some(file) = input.files().and_then(|files| files.get(0)) else {
			return;
		};
		let loaded = read_data_url(&file, move |url| {
			let _ = draft.try_update(|d| d.image = Some(url));
		});
		if let Err(e) = loaded {
			error!("failed to start reading image: {e}");
		}
	};

	let add_quality = move |_| {
		let name = new_quality.get_untracked();
		let mut added = false;
		draft.maybe_update(|d| {
			added = d.qualities.add(&name);
			added
		});
		if added {
			new_quality.set(String::new());
		}
	};

	let create = move |_| {
		let mut d = draft.get_untracked();
		let mut created = false;
		network.maybe_update(|n| {
			created = n.add_character(&mut d).is_some();
			created
		});
		if created {
			draft.set(d);
			if let Some(input) = file_ref.get_untracked() {
				input.set_value("");
			}
		}
	};

	view! {
		<section class="card">
			<h2>"Create character"</h2>
			<input
				type="text"
				placeholder="Name"
				prop:value=move || draft.with(|d| d.name.clone())
				on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
			/>
			<textarea
				placeholder="Description"
				prop:value=move || draft.with(|d| d.description.clone())
				on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
			></textarea>
			<input type="file" accept="image/*" node_ref=file_ref on:change=on_image />
			{move || {
				draft
					.with(|d| d.image.clone())
					.map(|src| view! { <img class="portrait" src=src alt="portrait" /> })
			}}

			{move || {
				qualities
					.get()
					.iter()
					.enumerate()
					.map(|(index, (name, value))| {
						let key = name.to_owned();
						view! {
							<QualityRow
								name=name.to_owned()
								value=value
								index=index
								on_change={move |v: i64| {
									draft.update(|d| {
										d.qualities.set(&key, v);
									})
								}}
							/>
						}
					})
					.collect_view()
			}}

			<div class="row">
				<input
					type="text"
					placeholder="New quality"
					prop:value=move || new_quality.get()
					on:input=move |ev| new_quality.set(event_target_value(&ev))
				/>
				<button on:click=add_quality>"+ Add quality"</button>
			</div>

			<label>"Guild (optional)"</label>
			<GuildSelect
				guilds=guilds
				selected=Signal::derive(move || draft.with(|d| d.guild))
				on_change={move |g: Option<GuildId>| draft.update(|d| d.guild = g)}
			/>

			<button class="primary" on:click=create>"Create"</button>
		</section>
	}
}
