use canopy::{EventLog, SelectionMode, TreeEngine, TreeEvent, TreeNode};

/// A{B, C{D}}
fn sample_forest() -> Vec<TreeNode> {
    vec![
        TreeNode::new("A", "A")
            .with_child(TreeNode::new("B", "B"))
            .with_child(TreeNode::new("C", "C").with_child(TreeNode::new("D", "D"))),
    ]
}

fn selected(tree: &TreeEngine) -> Vec<String> {
    tree.selected_ids()
}

#[test]
fn test_single_mode_click_sequence() {
    let mut tree = TreeEngine::with_items(sample_forest(), SelectionMode::Single);

    tree.handle_click("D");
    assert_eq!(selected(&tree), vec!["D"]);
    // D is a leaf, so its click expands nothing.
    assert_eq!(tree.expanded_len(), 0);

    tree.handle_click("C");
    assert_eq!(selected(&tree), vec!["C"]);
    assert!(tree.is_expanded("C"));

    tree.handle_click("D");
    assert_eq!(selected(&tree), vec!["D"]);
    assert!(tree.is_expanded("C"));

    tree.handle_click("B");
    assert_eq!(selected(&tree), vec!["B"]);
    assert!(!tree.is_selected("D"));
    assert!(tree.is_expanded("C"));
    assert_eq!(tree.expanded_len(), 1);
}

#[test]
fn test_single_mode_reclick_keeps_selection() {
    let mut tree = TreeEngine::with_items(sample_forest(), SelectionMode::Single);

    tree.handle_click("B");
    tree.handle_click("B");

    assert_eq!(selected(&tree), vec!["B"]);
}

#[test]
fn test_single_mode_clears_host_seeded_selection() {
    let roots = vec![
        TreeNode::new("x", "X").selected(true),
        TreeNode::new("y", "Y").selected(true),
        TreeNode::new("z", "Z"),
    ];
    let mut tree = TreeEngine::with_items(roots, SelectionMode::Single);

    tree.handle_click("z");

    assert_eq!(selected(&tree), vec!["z"]);
}

#[test]
fn test_multi_mode_child_click_deselects_parent() {
    let mut tree = TreeEngine::with_items(sample_forest(), SelectionMode::Multi);

    tree.handle_click("C");
    assert!(tree.is_selected("C"));

    tree.handle_click("D");
    assert!(!tree.is_selected("C"));
    assert!(tree.is_selected("D"));
}

#[test]
fn test_multi_mode_parent_click_deselects_descendants() {
    let mut tree = TreeEngine::with_items(sample_forest(), SelectionMode::Multi);

    tree.handle_click("B");
    tree.handle_click("D");
    assert_eq!(selected(&tree), vec!["B", "D"]);

    tree.handle_click("A");
    assert_eq!(selected(&tree), vec!["A"]);
}

#[test]
fn test_multi_mode_siblings_coexist() {
    let mut tree = TreeEngine::with_items(sample_forest(), SelectionMode::Multi);

    tree.handle_click("B");
    tree.handle_click("C");

    assert_eq!(selected(&tree), vec!["B", "C"]);
}

#[test]
fn test_multi_mode_deselect_leaves_others_alone() {
    let roots = vec![
        TreeNode::new("A", "A")
            .selected(true)
            .with_child(TreeNode::new("B", "B").selected(true)),
    ];
    let mut tree = TreeEngine::with_items(roots, SelectionMode::Multi);

    // Deselecting B must not touch A, even though they were both selected.
    tree.handle_click("B");

    assert!(tree.is_selected("A"));
    assert!(!tree.is_selected("B"));
}

#[test]
fn test_none_mode_click_only_expands_and_activates() {
    let log = EventLog::new();
    let mut tree = TreeEngine::with_items(sample_forest(), SelectionMode::None).with_sink(log.clone());

    tree.handle_click("A");

    assert!(selected(&tree).is_empty());
    assert!(tree.is_expanded("A"));
    assert_eq!(
        log.events(),
        vec![
            TreeEvent::ExpandChanged {
                node_id: "A".into(),
                expanded: true
            },
            TreeEvent::NodeActivated {
                node_id: "A".into()
            },
        ]
    );
}

#[test]
fn test_click_event_order() {
    let log = EventLog::new();
    let mut tree = TreeEngine::with_items(sample_forest(), SelectionMode::Multi).with_sink(log.clone());

    tree.handle_click("C");

    assert_eq!(
        log.events(),
        vec![
            TreeEvent::SelectionChanged {
                node_id: "C".into(),
                selected: true
            },
            TreeEvent::ExpandChanged {
                node_id: "C".into(),
                expanded: true
            },
            TreeEvent::NodeActivated {
                node_id: "C".into()
            },
        ]
    );
}

#[test]
fn test_leaf_click_emits_selection_then_activation() {
    let log = EventLog::new();
    let mut tree = TreeEngine::with_items(sample_forest(), SelectionMode::Single).with_sink(log.clone());

    tree.handle_click("B");

    assert_eq!(
        log.events(),
        vec![
            TreeEvent::SelectionChanged {
                node_id: "B".into(),
                selected: true
            },
            TreeEvent::NodeActivated {
                node_id: "B".into()
            },
        ]
    );
}

#[test]
fn test_disabled_click_is_noop() {
    let roots = vec![
        TreeNode::new("p", "P")
            .disabled(true)
            .with_child(TreeNode::new("c", "C")),
    ];
    for mode in [SelectionMode::None, SelectionMode::Single, SelectionMode::Multi] {
        let log = EventLog::new();
        let mut tree = TreeEngine::with_items(roots.clone(), mode).with_sink(log.clone());
        tree.clear_dirty();

        tree.handle_click("p");

        assert!(!tree.is_selected("p"), "mode {mode}");
        assert!(!tree.is_expanded("p"), "mode {mode}");
        assert!(log.is_empty(), "mode {mode}");
        assert!(!tree.is_dirty(), "mode {mode}");
    }
}

#[test]
fn test_unknown_click_is_noop() {
    let log = EventLog::new();
    let mut tree = TreeEngine::with_items(sample_forest(), SelectionMode::Single).with_sink(log.clone());

    tree.handle_click("nope");

    assert!(selected(&tree).is_empty());
    assert!(log.is_empty());
}

#[test]
fn test_clear_selection_reports_each_node() {
    let log = EventLog::new();
    let mut tree = TreeEngine::with_items(sample_forest(), SelectionMode::Multi).with_sink(log.clone());
    tree.handle_click("B");
    tree.handle_click("D");
    log.take();

    tree.clear_selection();

    assert!(selected(&tree).is_empty());
    assert_eq!(
        log.events(),
        vec![
            TreeEvent::SelectionChanged {
                node_id: "B".into(),
                selected: false
            },
            TreeEvent::SelectionChanged {
                node_id: "D".into(),
                selected: false
            },
        ]
    );

    tree.clear_selection();
    assert_eq!(log.len(), 2);
}

#[test]
fn test_visible_nodes_report_selection() {
    let mut tree = TreeEngine::with_items(sample_forest(), SelectionMode::Single);
    tree.handle_click("A");

    let nodes = tree.visible_nodes();
    assert!(nodes[0].selected);
    assert!(!nodes[1].selected);
}
