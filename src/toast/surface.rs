//! Display surfaces that host overlay elements
//!
//! A surface owns every element appended to it until the element is removed.
//! [`MemorySurface`] keeps elements in stacking order and is what the
//! terminal front end renders from.

use std::fmt;
use std::time::Duration;

/// Identifier of an element created by a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Timing curve of a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
}

impl Easing {
    fn css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn => "ease-in",
        }
    }
}

/// A style transition applied to an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub properties: Vec<&'static str>,
    pub duration: Duration,
    pub easing: Easing,
}

/// Inline style of an element
#[derive(Debug, Clone, PartialEq)]
pub struct ElementStyle {
    pub min_width: u16,
    pub opacity: f32,
    pub color: Rgb,
    pub background: Rgb,
    pub text_align: TextAlign,
    pub border_radius: u16,
    /// Centered on the surface (absolute at 50%/50%, translated back by half its size)
    pub centered: bool,
    pub z_index: i32,
    pub font_size: u16,
    pub padding: u16,
    pub transition: Option<Transition>,
}

impl ElementStyle {
    /// The overlay look of a toast: dark, rounded, centered, on top
    pub fn toast() -> Self {
        Self {
            min_width: 150,
            opacity: 0.9,
            color: Rgb(255, 255, 255),
            background: Rgb(0, 0, 0),
            text_align: TextAlign::Center,
            border_radius: 8,
            centered: true,
            z_index: 999,
            font_size: 14,
            padding: 20,
            transition: None,
        }
    }

    /// Start fading out: transform and opacity ease to transparent over `duration`
    pub fn begin_fade(&mut self, duration: Duration) {
        self.transition = Some(Transition {
            properties: vec!["transform", "opacity"],
            duration,
            easing: Easing::EaseIn,
        });
        self.opacity = 0.0;
    }

    /// Whether a fade-out has been applied
    pub fn is_fading(&self) -> bool {
        self.transition.is_some()
    }

    /// Render as an inline CSS declaration list
    pub fn css_text(&self) -> String {
        let Rgb(fr, fg, fb) = self.color;
        let Rgb(br, bg, bb) = self.background;
        let align = match self.text_align {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        };

        let mut css = format!(
            "min-width: {}px;opacity: {};height:auto;color: rgb({}, {}, {});text-align: {};\
             border-radius: {}px;",
            self.min_width, self.opacity, fr, fg, fb, align, self.border_radius
        );
        if self.centered {
            css.push_str("position: absolute;top: 50%;left: 50%;transform: translate(-50%, -50%);");
        }
        css.push_str(&format!(
            "z-index: {};background: rgb({}, {}, {});font-size: {}px;padding: {}px",
            self.z_index, br, bg, bb, self.font_size, self.padding
        ));
        if let Some(transition) = &self.transition {
            let secs = transition.duration.as_secs_f64();
            let parts: Vec<String> = transition
                .properties
                .iter()
                .map(|p| format!("{} {}s {}", p, secs, transition.easing.css()))
                .collect();
            css.push_str(&format!(";transition: {}", parts.join(", ")));
        }
        css
    }
}

/// An overlay element: text lines plus inline style
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: ElementId,
    pub lines: Vec<String>,
    pub style: ElementStyle,
}

impl Element {
    /// Set the text content; each `\n` starts a new display line
    pub fn set_text(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_string).collect();
    }

    /// Content as markup, lines joined with `<br/>`
    pub fn markup(&self) -> String {
        self.lines.join("<br/>")
    }
}

/// Capability to create, show, restyle and remove overlay elements
pub trait DisplaySurface {
    /// Create a detached element with a fresh id and toast styling
    fn create_element(&mut self) -> Element;

    /// Append an element on top of everything currently shown
    fn append(&mut self, element: Element);

    /// A shown element
    fn element(&self, id: ElementId) -> Option<&Element>;

    /// Mutable access to a shown element
    fn element_mut(&mut self, id: ElementId) -> Option<&mut Element>;

    /// Remove a shown element, handing it back
    fn remove(&mut self, id: ElementId) -> Option<Element>;

    /// Whether the element is currently shown
    fn contains(&self, id: ElementId) -> bool {
        self.element(id).is_some()
    }
}

/// In-memory surface keeping elements in stacking order
#[derive(Debug, Default)]
pub struct MemorySurface {
    next_id: u64,
    elements: Vec<Element>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elements bottom to top
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl DisplaySurface for MemorySurface {
    fn create_element(&mut self) -> Element {
        self.next_id += 1;
        Element {
            id: ElementId(self.next_id),
            lines: Vec::new(),
            style: ElementStyle::toast(),
        }
    }

    fn append(&mut self, element: Element) {
        self.elements.push(element);
    }

    fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    fn remove(&mut self, id: ElementId) -> Option<Element> {
        let index = self.elements.iter().position(|e| e.id == id)?;
        Some(self.elements.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_lines_and_markup() {
        let mut surface = MemorySurface::new();
        let mut element = surface.create_element();
        element.set_text("first\nsecond");

        assert_eq!(element.lines, vec!["first", "second"]);
        assert_eq!(element.markup(), "first<br/>second");
    }

    #[test]
    fn test_toast_css() {
        let css = ElementStyle::toast().css_text();
        assert!(css.contains("min-width: 150px"));
        assert!(css.contains("opacity: 0.9"));
        assert!(css.contains("z-index: 999"));
        assert!(css.contains("transform: translate(-50%, -50%)"));
        assert!(!css.contains("transition"));
    }

    #[test]
    fn test_begin_fade() {
        let mut style = ElementStyle::toast();
        style.begin_fade(Duration::from_millis(500));

        assert!(style.is_fading());
        assert_eq!(style.opacity, 0.0);
        assert!(style
            .css_text()
            .ends_with("transition: transform 0.5s ease-in, opacity 0.5s ease-in"));
    }

    #[test]
    fn test_append_and_remove() {
        let mut surface = MemorySurface::new();
        let first = surface.create_element();
        let second = surface.create_element();
        let (first_id, second_id) = (first.id, second.id);
        assert_ne!(first_id, second_id);

        surface.append(first);
        surface.append(second);
        assert_eq!(surface.len(), 2);

        assert!(surface.remove(first_id).is_some());
        assert!(surface.remove(first_id).is_none());
        assert!(!surface.contains(first_id));
        assert!(surface.contains(second_id));
    }
}
