use bst_layout::construction::{construct, Event, Session, Sink};
use bst_layout::layout::{Layout, LayoutError};
use bst_layout::tree::{Node, Side, Tree};
use kurbo::Point;

/// A sink that only keeps what a renderer drawing a static picture would need.
#[derive(Default)]
struct Drawing {
    nodes: Vec<(i32, Point)>,
    edges: Vec<(Point, Point)>,
    highlights: usize,
    complete: bool,
}

impl Sink<i32> for Drawing {
    fn emit(&mut self, event: Event<i32>) {
        assert!(!self.complete, "event after completion: {event:?}");
        match event {
            Event::PathHighlight(_) => self.highlights += 1,
            Event::NodeAppear { value, position } => self.nodes.push((value, position)),
            Event::EdgeAppear { from, to } => self.edges.push((from, to)),
            Event::InsertionSequenceComplete => self.complete = true,
        }
    }
}

fn position_of(drawing: &Drawing, value: i32) -> Point {
    drawing
        .nodes
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, p)| *p)
        .unwrap()
}

#[test]
fn reference_sequence_drawing() {
    let mut session = Session::new(Layout::default(), Drawing::default());
    for key in [50, 30, 70, 20, 40, 60, 80] {
        session.insert(key);
    }
    let (tree, drawing) = session.finish();

    assert!(drawing.complete);
    assert_eq!(drawing.highlights, 7);
    assert_eq!(drawing.nodes.len(), 7);
    assert_eq!(drawing.edges.len(), 6);
    assert_eq!(tree.len(), 7);

    assert_eq!(position_of(&drawing, 50), Point::new(0.0, 0.0));
    assert_eq!(position_of(&drawing, 20), Point::new(-3.0, -2.4));
    assert_eq!(position_of(&drawing, 80), Point::new(3.0, -2.4));

    // Every edge ends at a node that was just drawn.
    for (_, to) in &drawing.edges {
        assert!(drawing.nodes.iter().any(|(_, p)| p == to));
    }
}

#[test]
fn skewed_input_shrinks_offsets() {
    let (tree, events) = construct([10, 20, 30, 40], Layout::default());

    let offsets: Vec<f64> = events
        .iter()
        .filter_map(|e| match e {
            Event::EdgeAppear { from, to } => Some(to.x - from.x),
            _ => None,
        })
        .collect();
    assert_eq!(offsets, vec![2.0, 1.0, 0.5]);

    let chain: Vec<i32> = std::iter::successors(tree.root(), |n| n.child(Side::Right))
        .map(|n| *n.value())
        .collect();
    assert_eq!(chain, vec![10, 20, 30, 40]);
    assert_eq!(tree.depth_of(&40), Some(3));
}

#[test]
fn highlights_trace_the_descent() {
    let (_, events) = construct([50, 30, 70, 20, 40, 60, 80, 45], Layout::default());

    let last_highlight = events
        .iter()
        .rev()
        .find_map(|e| match e {
            Event::PathHighlight(path) => Some(path.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(last_highlight, vec![50, 30, 40]);
}

#[test]
fn custom_layout_scales_positions() {
    let layout = Layout::new(4.0, 2.0).unwrap();
    let (tree, _) = construct([0, -1, 1, 2], layout);

    let positions: Vec<(i32, Point)> = tree.iter().map(|n| (*n.value(), n.position())).collect();
    assert_eq!(
        positions,
        vec![
            (-1, Point::new(-4.0, -2.0)),
            (0, Point::new(0.0, 0.0)),
            (1, Point::new(4.0, -2.0)),
            (2, Point::new(6.0, -4.0)),
        ]
    );
}

#[test]
fn invalid_layout_is_rejected() {
    assert!(matches!(
        Layout::new(2.0, -1.2),
        Err(LayoutError::NonPositive {
            name: "vertical_spacing",
            ..
        })
    ));
}

#[test]
fn repeated_runs_agree() {
    let keys = [8, 3, 10, 1, 6, 14, 4, 7, 13, 6, 8];
    let snapshot = |tree: &Tree<i32>| -> Vec<(i32, usize, Point)> {
        tree.iter()
            .map(|n: &Node<i32>| (*n.value(), n.depth(), n.position()))
            .collect()
    };

    let (first, first_events) = construct(keys, Layout::default());
    let (second, second_events) = construct(keys, Layout::default());

    assert_eq!(snapshot(&first), snapshot(&second));
    assert_eq!(first_events, second_events);
}

quickcheck::quickcheck! {
    fn path_then_node_then_edge(xs: Vec<i8>) -> bool {
        let (_, events) = construct(xs, Layout::default());
        let mut iter = events.iter().peekable();
        let mut first = true;

        while let Some(event) = iter.next() {
            match event {
                Event::PathHighlight(_) => {
                    if !matches!(iter.next(), Some(Event::NodeAppear { .. })) {
                        return false;
                    }
                    if !first && !matches!(iter.next(), Some(Event::EdgeAppear { .. })) {
                        return false;
                    }
                    first = false;
                }
                Event::InsertionSequenceComplete => return iter.peek().is_none(),
                _ => return false,
            }
        }
        false
    }
}
