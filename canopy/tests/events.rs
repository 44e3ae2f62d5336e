use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use canopy::{EventLog, JsonEventSink, SelectionMode, TreeEngine, TreeEvent, TreeEventSink, TreeNode};

#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn forest() -> Vec<TreeNode> {
    vec![TreeNode::new("C", "C").with_child(TreeNode::new("D", "D"))]
}

#[test]
fn test_event_node_id_and_name() {
    let event = TreeEvent::SelectionChanged {
        node_id: "x".into(),
        selected: true,
    };
    assert_eq!(event.node_id(), "x");
    assert_eq!(event.name(), "selection_changed");
}

#[test]
fn test_event_log_clones_share_buffer() {
    let log = EventLog::new();
    let mut writer = log.clone();

    writer.on_event(&TreeEvent::NodeActivated {
        node_id: "a".into(),
    });

    assert_eq!(log.len(), 1);
    assert_eq!(log.take().len(), 1);
    assert!(log.is_empty());
}

#[test]
fn test_closure_sink_receives_events() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink_seen = Rc::clone(&seen);
    let mut tree = TreeEngine::with_items(forest(), SelectionMode::Single)
        .with_sink(move |event: &TreeEvent| sink_seen.borrow_mut().push(event.name()));

    tree.handle_click("C");

    assert_eq!(
        *seen.borrow(),
        vec!["selection_changed", "expand_changed", "node_activated"]
    );
}

#[test]
fn test_set_sink_replaces_previous() {
    let first = EventLog::new();
    let second = EventLog::new();
    let mut tree = TreeEngine::with_items(forest(), SelectionMode::None).with_sink(first.clone());

    tree.toggle_expand("C");
    tree.set_sink(second.clone());
    tree.toggle_expand("C");

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
}

#[test]
fn test_json_sink_writes_ndjson() {
    let buffer = SharedBuffer::default();
    let mut tree = TreeEngine::with_items(forest(), SelectionMode::Multi)
        .with_sink(JsonEventSink::with_writer(buffer.clone()));

    tree.handle_click("C");

    let output = buffer.contents();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        r#"{"event":"selection_changed","node":"C","selected":true}"#
    );
    assert_eq!(
        lines[1],
        r#"{"event":"expand_changed","expanded":true,"node":"C"}"#
    );
    assert_eq!(lines[2], r#"{"event":"node_activated","node":"C"}"#);
}

#[test]
fn test_json_lines_parse_back() {
    let event = TreeEvent::ExpandChanged {
        node_id: "C".into(),
        expanded: false,
    };
    let value = event.to_json();

    assert_eq!(value["event"], "expand_changed");
    assert_eq!(value["node"], "C");
    assert_eq!(value["expanded"], false);
}
