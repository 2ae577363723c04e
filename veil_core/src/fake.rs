// Copyright 2026 the Veil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory host for tests.
//!
//! Models the two platform behaviors the overlay depends on: attached
//! surface nodes contribute their display size to the page's scroll extent,
//! and resizing a backing store resets the context transform.

use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use kurbo::{Affine, Rect, Size};

use crate::extent::DocumentMetrics;
use crate::scale::BackingSize;
use crate::surface::{Host, OverlayStyle, Surface};

/// One recorded DOM mutation or drawing command.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Op {
    Create { node: u32 },
    Display { node: u32, size: Size },
    Backing { node: u32, size: BackingSize },
    Scale { node: u32, sx: f64, sy: f64 },
    Clear { node: u32, rect: Rect },
    Fill { node: u32, rect: Rect },
    Style { node: u32 },
    Attach { node: u32 },
    Detach { node: u32 },
}

#[derive(Debug, Default)]
struct Node {
    id: String,
    display: Size,
    backing: BackingSize,
    transform: Affine,
    style: Vec<(&'static str, String)>,
}

#[derive(Debug)]
struct Dom {
    content: Size,
    viewport: Size,
    ratio: f64,
    next_node: u32,
    nodes: BTreeMap<u32, Node>,
    children: Vec<u32>,
    ops: Vec<Op>,
}

impl Dom {
    fn node_mut(&mut self, node: u32) -> &mut Node {
        self.nodes.get_mut(&node).expect("unknown fake node")
    }
}

/// A page whose root container holds `content` plus any attached nodes.
#[derive(Clone, Debug)]
pub(crate) struct FakeHost {
    dom: Rc<RefCell<Dom>>,
}

impl FakeHost {
    pub(crate) fn new(content: Size, ratio: f64) -> Self {
        Self {
            dom: Rc::new(RefCell::new(Dom {
                content,
                viewport: Size::ZERO,
                ratio,
                next_node: 1,
                nodes: BTreeMap::new(),
                children: Vec::new(),
                ops: Vec::new(),
            })),
        }
    }

    pub(crate) fn set_content(&self, content: Size) {
        self.dom.borrow_mut().content = content;
    }

    pub(crate) fn set_viewport(&self, viewport: Size) {
        self.dom.borrow_mut().viewport = viewport;
    }

    pub(crate) fn set_ratio(&self, ratio: f64) {
        self.dom.borrow_mut().ratio = ratio;
    }

    /// Attaches an unrelated, zero-sized page node.
    pub(crate) fn add_page_node(&self) -> u32 {
        let mut dom = self.dom.borrow_mut();
        let node = dom.next_node;
        dom.next_node += 1;
        dom.nodes.insert(node, Node::default());
        dom.children.push(node);
        node
    }

    pub(crate) fn attached(&self) -> Vec<u32> {
        self.dom.borrow().children.clone()
    }

    pub(crate) fn node_id(&self, node: u32) -> Option<String> {
        self.dom.borrow().nodes.get(&node).map(|n| n.id.clone())
    }

    pub(crate) fn style(&self, node: u32) -> Vec<(&'static str, String)> {
        self.dom.borrow_mut().node_mut(node).style.clone()
    }

    pub(crate) fn display_size(&self, node: u32) -> Size {
        self.dom.borrow_mut().node_mut(node).display
    }

    pub(crate) fn backing_size(&self, node: u32) -> BackingSize {
        self.dom.borrow_mut().node_mut(node).backing
    }

    pub(crate) fn ops(&self) -> Vec<Op> {
        self.dom.borrow().ops.clone()
    }

    pub(crate) fn clear_ops(&self) {
        self.dom.borrow_mut().ops.clear();
    }
}

impl Host for FakeHost {
    type Surface = FakeSurface;

    fn document_metrics(&self) -> DocumentMetrics {
        let dom = self.dom.borrow();
        let mut scroll = dom.content;
        for node in &dom.children {
            let display = dom.nodes[node].display;
            scroll.width = scroll.width.max(display.width);
            scroll.height = scroll.height.max(display.height);
        }
        DocumentMetrics {
            scroll,
            offset: dom.viewport,
        }
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.dom.borrow().ratio
    }

    fn create_surface(&self, id: &str) -> FakeSurface {
        let mut dom = self.dom.borrow_mut();
        let node = dom.next_node;
        dom.next_node += 1;
        dom.nodes.insert(
            node,
            Node {
                id: String::from(id),
                ..Node::default()
            },
        );
        dom.ops.push(Op::Create { node });
        FakeSurface {
            node,
            context: FakeContext {
                node,
                dom: Rc::clone(&self.dom),
            },
        }
    }

    fn attach(&self, surface: &FakeSurface) {
        let mut dom = self.dom.borrow_mut();
        dom.children.push(surface.node);
        dom.ops.push(Op::Attach { node: surface.node });
    }
}

#[derive(Debug)]
pub(crate) struct FakeSurface {
    node: u32,
    context: FakeContext,
}

impl FakeSurface {
    pub(crate) fn node(&self) -> u32 {
        self.node
    }

    fn with_dom<R>(&self, f: impl FnOnce(&mut Dom) -> R) -> R {
        f(&mut self.context.dom.borrow_mut())
    }
}

impl Surface for FakeSurface {
    type Context = FakeContext;

    fn context(&self) -> &FakeContext {
        &self.context
    }

    fn set_display_size(&mut self, size: Size) {
        let node = self.node;
        self.with_dom(|dom| {
            dom.node_mut(node).display = size;
            dom.ops.push(Op::Display { node, size });
        });
    }

    fn set_backing_size(&mut self, size: BackingSize) {
        let node = self.node;
        self.with_dom(|dom| {
            let n = dom.node_mut(node);
            n.backing = size;
            n.transform = Affine::IDENTITY;
            dom.ops.push(Op::Backing { node, size });
        });
    }

    fn scale_context(&mut self, sx: f64, sy: f64) {
        let node = self.node;
        self.with_dom(|dom| {
            let n = dom.node_mut(node);
            n.transform = n.transform * Affine::scale_non_uniform(sx, sy);
            dom.ops.push(Op::Scale { node, sx, sy });
        });
    }

    fn clear_rect(&mut self, rect: Rect) {
        let node = self.node;
        self.with_dom(|dom| dom.ops.push(Op::Clear { node, rect }));
    }

    fn apply_style(&mut self, style: &OverlayStyle) {
        let node = self.node;
        self.with_dom(|dom| {
            dom.node_mut(node).style = style.declarations().into();
            dom.ops.push(Op::Style { node });
        });
    }

    fn detach(&mut self) {
        let node = self.node;
        self.with_dom(|dom| {
            if let Some(pos) = dom.children.iter().position(|&c| c == node) {
                dom.children.remove(pos);
                dom.ops.push(Op::Detach { node });
            }
        });
    }
}

/// Drawing context of a [`FakeSurface`].
#[derive(Debug)]
pub(crate) struct FakeContext {
    node: u32,
    dom: Rc<RefCell<Dom>>,
}

impl FakeContext {
    pub(crate) fn transform(&self) -> Affine {
        self.dom.borrow_mut().node_mut(self.node).transform
    }

    pub(crate) fn fill_rect(&self, rect: Rect) {
        self.dom.borrow_mut().ops.push(Op::Fill {
            node: self.node,
            rect,
        });
    }
}
