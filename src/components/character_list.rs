use leptos::prelude::*;

use super::widgets::{GuildSelect, QualityRow};
use crate::network::{Character, Guild, GuildId, Network};

#[component]
fn CharacterCard(
	character: Character,
	network: RwSignal<Network>,
	guilds: Memo<Vec<Guild>>,
) -> impl IntoView {
	let id = character.id;
	let guild = character.guild;
	let qualities = character
		.qualities
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
						network.update(|n| {
							n.set_character_quality(id, &key, v);
						})
					}}
				/>
			}
		})
		.collect_view();

	view! {
		<article class="card character">
			{character.image.map(|src| view! { <img class="portrait" src=src alt="portrait" /> })}
			<h3>{character.name}</h3>
			<p class="description">{character.description}</p>
			{qualities}
			<div class="row">
				<label>"Guild: "</label>
				<GuildSelect
					guilds=guilds
					selected=Signal::derive(move || guild)
					on_change={move |g: Option<GuildId>| {
						network.update(|n| {
							n.assign_character_to_guild(id, g);
						})
					}}
				/>
			</div>
			<button
				class="danger"
				on:click=move |_| {
					network.update(|n| {
						n.remove_character(id);
					})
				}
			>
				"Delete"
			</button>
		</article>
	}
}

/// One card per character, in creation order.
#[component]
pub fn CharacterList(
	network: RwSignal<Network>,
	characters: Memo<Vec<Character>>,
	guilds: Memo<Vec<Guild>>,
) -> impl IntoView {
	view! {
		<div class="character-list">
			{move || {
				characters
					.get()
					.into_iter()
					.map(|character| {
						view! { <CharacterCard character=character network=network guilds=guilds /> }
					})
					.collect_view()
			}}
		</div>
	}
}
