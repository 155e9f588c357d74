use roomkit_designer::{BuilderState, Point2D, Wall};

fn state_with_walls(n: usize) -> (BuilderState, Vec<roomkit_designer::ElementId>) {
    let mut state = BuilderState::new();
    state.create_new_room("Organization");
    let ids = (0..n)
        .filter_map(|i| {
            let x = i as f64;
            state.add_wall(Wall::new(
                Point2D::new(x, 0.0),
                Point2D::new(x + 1.0, 0.0),
                2.7,
                0.2,
            ))
        })
        .collect();
    (state, ids)
}

#[test]
fn test_group_selected_needs_two() {
    let (mut state, ids) = state_with_walls(3);
    state.add_to_selection(ids[0]);
    assert!(state.group_selected("Solo").is_none());

    state.add_to_selection(ids[1]);
    let group = state.group_selected("Pair").unwrap();
    let members = &state.organization().group(group).unwrap().element_ids;
    assert_eq!(members, &vec![ids[0], ids[1]]);
}

#[test]
fn test_group_lock_blocks_edits_until_unlocked() {
    let (mut state, ids) = state_with_walls(2);
    let group = state.create_group("Walls", &ids).unwrap();

    assert!(state.toggle_group_lock(group));
    assert!(!state.remove_wall(ids[0]));
    assert!(state.toggle_group_lock(group));
    assert!(state.remove_wall(ids[0]));
}

#[test]
fn test_group_visibility_hides_members() {
    let (mut state, ids) = state_with_walls(2);
    let group = state.create_group("Walls", &ids).unwrap();
    state.toggle_group_visibility(group);
    assert!(ids.iter().all(|id| state.is_hidden(*id)));
    assert!(state.hit_test(Point2D::new(0.5, 0.0)).is_none());
}

#[test]
fn test_ungroup_keeps_member_flags() {
    let (mut state, ids) = state_with_walls(2);
    let group = state.create_group("Walls", &ids).unwrap();
    state.toggle_group_lock(group);
    assert!(state.ungroup(group));
    assert!(state.organization().group(group).is_none());
    assert!(state.is_locked(ids[0]));
}

#[test]
fn test_select_group_and_rename() {
    let (mut state, ids) = state_with_walls(3);
    let group = state.create_group("Front", &ids[1..]).unwrap();
    assert!(state.rename_group(group, "Back"));
    assert_eq!(state.organization().group(group).unwrap().name, "Back");

    assert!(state.select_group(group));
    assert_eq!(state.selected_elements(), &ids[1..]);
}

#[test]
fn test_select_all_and_toggle() {
    let (mut state, ids) = state_with_walls(3);
    state.select_all();
    assert_eq!(state.selected_elements(), ids.as_slice());
    state.toggle_in_selection(ids[1]);
    assert_eq!(state.selected_elements(), &[ids[0], ids[2]]);
    state.remove_from_selection(ids[0]);
    state.clear_multi_selection();
    assert!(state.selected_elements().is_empty());
}

#[test]
fn test_layer_lifecycle() {
    let mut state = BuilderState::new();
    let first = state.organization().layers[0].id;
    assert!(!state.remove_layer(first));

    let second = state.add_layer("Electrical");
    assert!(state.set_active_layer(second));
    assert!(state.rename_layer(second, "Wiring"));
    assert!(state.set_layer_color(second, "#ff0000"));
    assert!(state.toggle_layer_visibility(second));
    assert!(state.toggle_layer_lock(second));

    let layer = state.organization().layer(second).unwrap();
    assert_eq!(layer.name, "Wiring");
    assert_eq!(layer.color, "#ff0000");
    assert!(!layer.is_visible);
    assert!(layer.is_locked);

    assert!(state.remove_layer(second));
    assert_eq!(state.organization().active_layer, Some(first));
    assert!(!state.set_active_layer(second));
}
