//! In-memory page and scheduler.
//!
//! `MemoryPage` is a flat element tree with just enough selector support for
//! the landing page lookups (tag, `#id`, `.class`, one `[attr]`, `[attr="v"]`
//! or `[attr^="v"]` test per compound, and the descendant combinator).
//! Elements are created in document order. `ManualScheduler` runs on a
//! virtual clock that only moves when asked to.

use crate::landing::Landing;
use crate::page::Page;
use crate::schedule::{Scheduler, TaskKey};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default)]
struct Node {
    tag: String,
    parent: Option<NodeId>,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    text: String,
    html: String,
    styles: BTreeMap<String, String>,
    offset_top: f64,
    offset_height: f64,
}

#[derive(Debug, Clone, PartialEq)]
enum AttrTest {
    Exists(String),
    Equals(String, String),
    Prefix(String, String),
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attr: Option<AttrTest>,
}

fn parse_attr(raw: &str) -> AttrTest {
    let unquote = |v: &str| v.trim().trim_matches('"').trim_matches('\'').to_owned();
    if let Some((name, value)) = raw.split_once("^=") {
        AttrTest::Prefix(name.trim().to_owned(), unquote(value))
    } else if let Some((name, value)) = raw.split_once('=') {
        AttrTest::Equals(name.trim().to_owned(), unquote(value))
    } else {
        AttrTest::Exists(raw.trim().to_owned())
    }
}

fn parse_compound(raw: &str) -> Compound {
    let mut compound = Compound::default();
    let (head, attr) = match raw.split_once('[') {
        Some((head, rest)) => (head, Some(rest.trim_end_matches(']'))),
        None => (raw, None),
    };
    compound.attr = attr.map(parse_attr);

    let is_marker = |ch: char| ch == '#' || ch == '.';
    let tag_end = head.find(is_marker).unwrap_or(head.len());
    if tag_end > 0 {
        compound.tag = Some(head[..tag_end].to_ascii_lowercase());
    }
    let mut rest = &head[tag_end..];
    while let Some(marker) = rest.chars().next() {
        let body = &rest[1..];
        let end = body.find(is_marker).unwrap_or(body.len());
        let name = body[..end].to_owned();
        if marker == '#' {
            compound.id = Some(name);
        } else {
            compound.classes.push(name);
        }
        rest = &body[end..];
    }
    compound
}

fn parse_selector(raw: &str) -> Vec<Compound> {
    raw.split_whitespace().map(parse_compound).collect()
}

impl Node {
    fn matches(&self, compound: &Compound) -> bool {
        if let Some(tag) = &compound.tag {
            if &self.tag != tag {
                return false;
            }
        }
        if let Some(id) = &compound.id {
            if self.attrs.get("id") != Some(id) {
                return false;
            }
        }
        if !compound.classes.iter().all(|c| self.classes.contains(c)) {
            return false;
        }
        match &compound.attr {
            None => true,
            Some(AttrTest::Exists(name)) => self.attrs.contains_key(name),
            Some(AttrTest::Equals(name, value)) => self.attrs.get(name) == Some(value),
            Some(AttrTest::Prefix(name, value)) => self
                .attrs
                .get(name)
                .is_some_and(|v| v.starts_with(value.as_str())),
        }
    }
}

pub struct MemoryPage {
    nodes: RefCell<Vec<Node>>,
    viewport_width: Cell<f64>,
    scroll_y: Cell<f64>,
    hash: RefCell<String>,
    year: Cell<i32>,
    scrolls: RefCell<Vec<f64>>,
    opened: RefCell<Vec<String>>,
}

impl MemoryPage {
    /// An empty document whose only element is `<body>`.
    pub fn new(viewport_width: f64) -> Self {
        let body = Node {
            tag: "body".to_owned(),
            ..Node::default()
        };
        Self {
            nodes: RefCell::new(vec![body]),
            viewport_width: Cell::new(viewport_width),
            scroll_y: Cell::new(0.0),
            hash: RefCell::new(String::new()),
            year: Cell::new(2026),
            scrolls: RefCell::new(Vec::new()),
            opened: RefCell::new(Vec::new()),
        }
    }

    pub fn body_id(&self) -> NodeId {
        NodeId(0)
    }

    /// Append an element described as `tag#id.class[attr="value"]` under
    /// `parent` (or `<body>`).
    pub fn create(&self, parent: Option<NodeId>, shape: &str) -> NodeId {
        let compound = parse_compound(shape);
        let mut node = Node {
            tag: compound.tag.unwrap_or_else(|| "div".to_owned()),
            parent: Some(parent.unwrap_or(self.body_id())),
            classes: compound.classes,
            ..Node::default()
        };
        if let Some(id) = compound.id {
            node.attrs.insert("id".to_owned(), id);
        }
        match compound.attr {
            Some(AttrTest::Equals(name, value)) | Some(AttrTest::Prefix(name, value)) => {
                node.attrs.insert(name, value);
            }
            Some(AttrTest::Exists(name)) => {
                node.attrs.insert(name, String::new());
            }
            None => {}
        }
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(node);
        NodeId(nodes.len() - 1)
    }

    pub fn set_geometry(&self, el: NodeId, offset_top: f64, offset_height: f64) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[el.0].offset_top = offset_top;
        nodes[el.0].offset_height = offset_height;
    }

    pub fn set_viewport_width(&self, width: f64) {
        self.viewport_width.set(width);
    }

    pub fn set_scroll_y(&self, y: f64) {
        self.scroll_y.set(y);
    }

    pub fn set_hash(&self, hash: &str) {
        *self.hash.borrow_mut() = hash.to_owned();
    }

    pub fn set_year(&self, year: i32) {
        self.year.set(year);
    }

    pub fn text(&self, el: NodeId) -> String {
        self.nodes.borrow()[el.0].text.clone()
    }

    pub fn html(&self, el: NodeId) -> String {
        self.nodes.borrow()[el.0].html.clone()
    }

    pub fn style(&self, el: NodeId, property: &str) -> Option<String> {
        self.nodes.borrow()[el.0].styles.get(property).cloned()
    }

    /// Every smooth-scroll target requested so far.
    pub fn scrolls(&self) -> Vec<f64> {
        self.scrolls.borrow().clone()
    }

    pub fn opened_urls(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }

    fn find(&self, scope: Option<NodeId>, selector: &str) -> Vec<NodeId> {
        let parts = parse_selector(selector);
        let nodes = self.nodes.borrow();
        (0..nodes.len())
            .map(NodeId)
            .filter(|&id| scope.is_none_or(|root| id != root && self.is_descendant(&nodes, id, root)))
            .filter(|&id| Self::matches_parts(&nodes, id, &parts))
            .collect()
    }

    fn is_descendant(&self, nodes: &[Node], id: NodeId, ancestor: NodeId) -> bool {
        let mut current = nodes[id.0].parent;
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = nodes[parent.0].parent;
        }
        false
    }

    fn matches_parts(nodes: &[Node], id: NodeId, parts: &[Compound]) -> bool {
        let Some((last, ancestors)) = parts.split_last() else {
            return false;
        };
        if !nodes[id.0].matches(last) {
            return false;
        }
        let mut current = nodes[id.0].parent;
        for part in ancestors.iter().rev() {
            loop {
                let Some(parent) = current else {
                    return false;
                };
                current = nodes[parent.0].parent;
                if nodes[parent.0].matches(part) {
                    break;
                }
            }
        }
        true
    }
}

impl Page for MemoryPage {
    type Element = NodeId;

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.find(None, selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.find(None, selector)
    }

    fn query_within(&self, parent: &NodeId, selector: &str) -> Option<NodeId> {
        self.find(Some(*parent), selector).into_iter().next()
    }

    fn query_all_within(&self, parent: &NodeId, selector: &str) -> Vec<NodeId> {
        self.find(Some(*parent), selector)
    }

    fn by_id(&self, id: &str) -> Option<NodeId> {
        self.query(&format!("#{id}"))
    }

    fn body(&self) -> Option<NodeId> {
        Some(self.body_id())
    }

    fn closest(&self, el: &NodeId, selector: &str) -> Option<NodeId> {
        let parts = parse_selector(selector);
        let nodes = self.nodes.borrow();
        let mut current = Some(*el);
        while let Some(id) = current {
            if Self::matches_parts(&nodes, id, &parts) {
                return Some(id);
            }
            current = nodes[id.0].parent;
        }
        None
    }

    fn has_class(&self, el: &NodeId, class: &str) -> bool {
        self.nodes.borrow()[el.0].classes.iter().any(|c| c == class)
    }

    fn add_class(&self, el: &NodeId, class: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[el.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
        }
    }

    fn remove_class(&self, el: &NodeId, class: &str) {
        self.nodes.borrow_mut()[el.0].classes.retain(|c| c != class);
    }

    fn toggle_class(&self, el: &NodeId, class: &str) -> bool {
        let present = !self.has_class(el, class);
        self.set_class(el, class, present);
        present
    }

    fn attribute(&self, el: &NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[el.0].attrs.get(name).cloned()
    }

    fn set_attribute(&self, el: &NodeId, name: &str, value: &str) {
        self.nodes.borrow_mut()[el.0]
            .attrs
            .insert(name.to_owned(), value.to_owned());
    }

    fn set_text(&self, el: &NodeId, text: &str) {
        self.nodes.borrow_mut()[el.0].text = text.to_owned();
    }

    fn set_inner_html(&self, el: &NodeId, html: &str) {
        self.nodes.borrow_mut()[el.0].html = html.to_owned();
    }

    fn set_style(&self, el: &NodeId, property: &str, value: &str) {
        self.nodes.borrow_mut()[el.0]
            .styles
            .insert(property.to_owned(), value.to_owned());
    }

    fn clear_style(&self, el: &NodeId, property: &str) {
        self.nodes.borrow_mut()[el.0].styles.remove(property);
    }

    fn offset_top(&self, el: &NodeId) -> f64 {
        self.nodes.borrow()[el.0].offset_top
    }

    fn offset_height(&self, el: &NodeId) -> f64 {
        self.nodes.borrow()[el.0].offset_height
    }

    fn bounding_top(&self, el: &NodeId) -> f64 {
        self.offset_top(el) - self.scroll_y.get()
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width.get()
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    /// Lands instantly; the animation is the browser's business.
    fn scroll_to_smooth(&self, top: f64) {
        self.scrolls.borrow_mut().push(top);
        self.scroll_y.set(top.max(0.0));
    }

    fn location_hash(&self) -> String {
        self.hash.borrow().clone()
    }

    fn open_in_new_context(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_owned());
    }

    fn current_year(&self) -> i32 {
        self.year.get()
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingTask {
    due: u64,
    period: Option<u32>,
}

#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: u64,
    pending: BTreeMap<TaskKey, PendingTask>,
}

impl ManualScheduler {
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Earliest task due at or before `until`. The clock moves to its due
    /// time; repeating tasks are re-armed.
    pub fn pop_due(&mut self, until: u64) -> Option<TaskKey> {
        let (key, task) = self
            .pending
            .iter()
            .filter(|(_, task)| task.due <= until)
            .min_by_key(|(key, task)| (task.due, **key))
            .map(|(key, task)| (*key, *task))?;
        self.now = task.due;
        match task.period {
            Some(period) => {
                let next = PendingTask {
                    due: task.due + u64::from(period.max(1)),
                    period: Some(period),
                };
                self.pending.insert(key, next);
            }
            None => {
                self.pending.remove(&key);
            }
        }
        Some(key)
    }

    pub fn set_now(&mut self, now: u64) {
        self.now = self.now.max(now);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, key: TaskKey, delay_ms: u32) {
        let task = PendingTask {
            due: self.now + u64::from(delay_ms),
            period: None,
        };
        self.pending.insert(key, task);
    }

    fn every(&mut self, key: TaskKey, period_ms: u32) {
        let task = PendingTask {
            due: self.now + u64::from(period_ms.max(1)),
            period: Some(period_ms),
        };
        self.pending.insert(key, task);
    }

    fn cancel(&mut self, key: TaskKey) {
        self.pending.remove(&key);
    }

    fn is_pending(&self, key: TaskKey) -> bool {
        self.pending.contains_key(&key)
    }
}

impl Landing<MemoryPage, ManualScheduler> {
    /// Move the virtual clock forward, firing due tasks in order.
    pub fn advance(&mut self, ms: u64) {
        let until = self.scheduler.now() + ms;
        while let Some(key) = self.scheduler.pop_due(until) {
            self.on_timer(key);
        }
        self.scheduler.set_now(until);
    }
}
