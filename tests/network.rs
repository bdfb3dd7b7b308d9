use guild_network::network::viewport::{HIT_RADIUS, MAX_SCALE};
use guild_network::network::{
	CharacterDraft, GuildDraft, Interaction, Link, Network, NodeId, Point, Viewport,
};

fn ember(net: &mut Network) -> guild_network::network::GuildId {
	net.add_guild(&mut GuildDraft {
		name: "Ember".into(),
		color: "#ff0000".into(),
	})
	.expect("guild should be created")
}

#[test]
fn guild_then_member_yields_single_link() {
	let mut net = Network::new();
	let guild = ember(&mut net);
	let rin = net
		.add_character(&mut CharacterDraft {
			name: "Rin".into(),
			guild: Some(guild),
			..Default::default()
		})
		.expect("character should be created");

	assert_eq!(net.links(), vec![Link { from: rin, to: guild }]);
	assert!(net.position(NodeId::Character(rin)).is_some());
	assert!(net.position(NodeId::Guild(guild)).is_some());
	assert_eq!(net.guild(guild).map(|g| g.color.as_str()), Some("#ff0000"));
}

#[test]
fn drag_zoom_and_delete_flow() {
	let mut net = Network::new();
	let guild = ember(&mut net);
	let rin = net
		.add_character(&mut CharacterDraft {
			name: "Rin".into(),
			guild: Some(guild),
			..Default::default()
		})
		.unwrap();
	let mut vp = Viewport::new();

	// Zoom in fully around an arbitrary cursor, then grab the guild by its centre.
	let cursor = Point::new(320.0, 240.0);
	for _ in 0..40 {
		vp.wheel(cursor, -120.0);
	}
	assert!((vp.transform.k - MAX_SCALE).abs() < 1e-9);

	let guild_at = net.position(guild.into()).unwrap();
	let grab = vp.transform.world_to_screen(guild_at);
	assert_eq!(vp.pointer_down(&net, grab), Interaction::DraggingNode(guild.into()));

	let drop = Point::new(grab.x + 40.0, grab.y - 80.0);
	assert!(vp.pointer_move(&mut net, drop));
	vp.pointer_up();
	let moved = net.position(guild.into()).unwrap();
	assert!((moved.x - (guild_at.x + 10.0)).abs() < 1e-9);
	assert!((moved.y - (guild_at.y - 20.0)).abs() < 1e-9);

	// The old spot is now empty, so a press there pans instead.
	let empty = vp.transform.world_to_screen(Point::new(guild_at.x - HIT_RADIUS * 3.0, guild_at.y));
	assert!(matches!(vp.pointer_down(&net, empty), Interaction::Panning { .. }));
	vp.pointer_up();

	assert!(net.remove_guild(guild));
	assert_eq!(net.characters().len(), 1);
	assert_eq!(net.character(rin).unwrap().guild, None);
	assert!(net.links().is_empty());
	assert_eq!(net.draw_order().collect::<Vec<_>>(), vec![NodeId::Character(rin)]);
}
