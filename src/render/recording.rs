//! # Recording Renderer
//!
//! Test stand-in for the UI. Every call is appended to a shared log so a
//! test can hand the renderer to the service and still inspect what was
//! drawn afterwards.

use std::sync::{Arc, Mutex};

use super::Renderer;
use crate::domain::{CartEntry, Price, Product, ProductId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    Catalog(Vec<ProductId>),
    Count(usize),
    Items(Vec<ProductId>),
    Total(Price),
    Visibility(bool),
    Message(String),
}

#[derive(Clone, Default)]
pub struct RecordingRenderer {
    events: Arc<Mutex<Vec<RenderEvent>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Drains the log, so the next assertion only sees new calls.
    pub fn take(&self) -> Vec<RenderEvent> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }

    pub fn messages(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                RenderEvent::Message(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: RenderEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl Renderer for RecordingRenderer {
    fn display_catalog(&mut self, products: &[Product]) {
        self.record(RenderEvent::Catalog(products.iter().map(|p| p.id).collect()));
    }

    fn display_cart_count(&mut self, count: usize) {
        self.record(RenderEvent::Count(count));
    }

    fn display_cart_items(&mut self, entries: &[CartEntry]) {
        self.record(RenderEvent::Items(
            entries.iter().map(|e| e.product.id).collect(),
        ));
    }

    fn display_cart_total(&mut self, total: Price) {
        self.record(RenderEvent::Total(total));
    }

    fn display_cart_visibility(&mut self, visible: bool) {
        self.record(RenderEvent::Visibility(visible));
    }

    fn show_message(&mut self, text: &str) {
        self.record(RenderEvent::Message(text.to_string()));
    }
}
