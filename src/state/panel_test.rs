use super::*;

// =============================================================
// PanelState defaults
// =============================================================

#[test]
fn panel_state_default_is_visible_and_collapsed() {
    let state = PanelState::default();
    assert!(state.visible);
    assert!(!state.expanded);
}

// =============================================================
// Toggles
// =============================================================

#[test]
fn toggles_are_independent() {
    let mut state = PanelState::default();

    state.toggle_expanded();
    assert!(state.visible);
    assert!(state.expanded);

    state.toggle_visible();
    assert!(!state.visible);
    assert!(state.expanded);

    state.toggle_visible();
    state.toggle_expanded();
    assert_eq!(state, PanelState::default());
}

#[test]
fn panel_state_missing_field_fails_to_parse() {
    assert!(serde_json::from_str::<PanelState>(r#"{"visible":true}"#).is_err());
    let parsed: PanelState = serde_json::from_str(r#"{"visible":false,"expanded":true}"#).unwrap();
    assert_eq!(parsed, PanelState { visible: false, expanded: true });
}
