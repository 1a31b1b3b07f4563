//! Renderable surface abstraction and the in-memory board behind the TUI.

use super::{Element, ElementId};

/// Minimal capability a rendering target must offer: append an element to
/// the end, remove one by id. Everything else (layout, styling) is the
/// renderer's business.
pub trait Surface {
    /// Appends as the last element and hands back its id.
    fn append(&mut self, element: Element) -> ElementId;

    /// Removes the element with this id. Returns false if it is already
    /// gone, which is not an error: a timer may fire after an external
    /// actor removed the element directly.
    fn remove(&mut self, id: ElementId) -> bool;
}

/// The root content area: an append-ordered list of live elements.
///
/// Iteration order equals append order, so callers observe messages in
/// the order they were shown. Fully headless; the TUI layer only reads it.
#[derive(Debug, Default)]
pub struct MessageBoard {
    entries: Vec<(ElementId, Element)>,
}

impl MessageBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[allow(dead_code)]
    pub fn contains(&self, id: ElementId) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }

    #[allow(dead_code)]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, element)| element)
    }

    /// Elements in append order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        self.entries.iter().map(|(id, element)| (*id, element))
    }
}

impl Surface for MessageBoard {
    fn append(&mut self, element: Element) -> ElementId {
        let id = ElementId::next();
        self.entries.push((id, element));
        id
    }

    fn remove(&mut self, id: ElementId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = MessageBoard::new();
        assert!(board.is_empty());
        assert_eq!(board.len(), 0);
    }

    #[test]
    fn append_preserves_call_order() {
        let mut board = MessageBoard::new();
        board.append(Element::new("first"));
        board.append(Element::new("second"));
        board.append(Element::new("third"));

        let texts: Vec<&str> = board.iter().map(|(_, e)| e.text()).collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }

    #[test]
    fn remove_targets_only_the_given_id() {
        let mut board = MessageBoard::new();
        let first = board.append(Element::new("keep"));
        let second = board.append(Element::new("drop"));
        let third = board.append(Element::new("keep too"));

        assert!(board.remove(second));
        assert!(board.contains(first));
        assert!(!board.contains(second));
        assert!(board.contains(third));
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn remove_missing_id_returns_false() {
        let mut board = MessageBoard::new();
        let id = board.append(Element::new("once"));
        assert!(board.remove(id));
        assert!(!board.remove(id));
    }

    #[test]
    fn get_returns_the_appended_element() {
        let mut board = MessageBoard::new();
        let id = board.append(Element::new("hello").with_class("message"));
        let element = board.get(id).expect("element should be present");
        assert_eq!(element.text(), "hello");
        assert!(board.get(ElementId::next()).is_none());
    }
}
