use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ListenerTarget {
    Container,
    Indicator(usize),
    Document,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    Click,
    TouchStart,
    TouchMove,
    TouchEnd,
    TouchCancel,
    MouseDown,
    MouseMove,
    MouseUp,
    MouseEnter,
    MouseLeave,
    KeyDown,
}

/// Event listeners a carousel currently has attached to the page.
#[derive(Debug, Clone, Default)]
pub struct Listeners {
    attached: BTreeSet<(ListenerTarget, EventKind)>,
}

impl Listeners {
    pub fn attach(&mut self, target: ListenerTarget, kind: EventKind) {
        self.attached.insert((target, kind));
    }

    pub fn detach(&mut self, target: ListenerTarget, kind: EventKind) -> bool {
        self.attached.remove(&(target, kind))
    }

    pub fn is_attached(&self, target: ListenerTarget, kind: EventKind) -> bool {
        self.attached.contains(&(target, kind))
    }

    pub fn len(&self) -> usize {
        self.attached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }

    pub fn clear(&mut self) {
        self.attached.clear();
    }
}
