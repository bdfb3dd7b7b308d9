//! Small inputs shared by the character form and the character cards.

use leptos::prelude::*;

use web_sys::HtmlInputElement;

use crate::network::{Guild, GuildId, clamp_quality, parse_quality_input};

/// Bar colours, cycled by quality position.
const QUALITY_COLORS: &[&str] = &[
	"#ef4444", "#22c55e", "#3b82f6", "#eab308", "#a855f7", "#ec4899", "#f97316",
];

#[component]
pub fn QualityRow(
	name: String,
	value: u8,
	index: usize,
	#[prop(into)] on_change: Callback<i64>,
) -> impl IntoView {
	let color = QUALITY_COLORS[index % QUALITY_COLORS.len()];
	// An out-of-range edit may leave the stored value unchanged, in which case
	// nothing re-renders, so the field is rewritten here.
	let on_input_change = move |ev: leptos::ev::Event| {
		let input: HtmlInputElement = event_target(&ev);
		let raw = parse_quality_input(&input.value());
		input.set_value(&clamp_quality(raw).to_string());
		on_change.run(raw);
	};
	view! {
		<div class="quality">
			<label>{name}": "</label>
			<input
				type="number"
				min="0"
				max="100"
				prop:value=value.to_string()
				on:change=on_input_change
			/>
			<div class="quality-track">
				<div
					class="quality-fill"
					style=format!("width: {value}%; background-color: {color};")
				></div>
			</div>
		</div>
	}
}

/// Dropdown of every guild plus a "None" entry.
#[component]
pub fn GuildSelect(
	guilds: Memo<Vec<Guild>>,
	#[prop(into)] selected: Signal<Option<GuildId>>,
	#[prop(into)] on_change: Callback<Option<GuildId>>,
) -> impl IntoView {
	view! {
		<select
			class="guild-select"
			on:change=move |ev| on_change.run(event_target_value(&ev).parse::<GuildId>().ok())
		>
			<option value="" prop:selected=move || selected.get().is_none()>
				"None"
			</option>
			{move || {
				guilds
					.get()
					.into_iter()
					.map(|g| {
						let id = g.id;
						view! {
							<option
								value=id.to_string()
								prop:selected=move || selected.get() == Some(id)
							>
								{g.name}
							</option>
						}
					})
					.collect_view()
			}}
		</select>
	}
}
