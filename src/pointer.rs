use log::{debug, error};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Window};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    pub fn from_event(e: &MouseEvent) -> Self {
        Self { x: e.client_x(), y: e.client_y() }
    }

    /// Inline style for the decorative spotlight that follows the cursor.
    pub fn spotlight_style(self) -> String {
        format!(
            "background: radial-gradient(600px circle at {}px {}px, rgba(34, 211, 238, 0.12), transparent 40%);",
            self.x, self.y
        )
    }
}

/// Window `mousemove` subscription, removed again when dropped.
pub struct PointerListener {
    window: Window,
    callback: Closure<dyn FnMut(MouseEvent)>,
}

impl PointerListener {
    pub fn subscribe(on_move: impl Fn(PointerPosition) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(move |e: MouseEvent| {
            on_move(PointerPosition::from_event(&e));
        }) as Box<dyn FnMut(MouseEvent)>);

        if let Err(e) = window.add_event_listener_with_callback("mousemove", callback.as_ref().unchecked_ref()) {
            error!("Failed to register pointer listener: {:?}", e);
            return None;
        }
        debug!("Pointer listener registered");
        Some(Self { window, callback })
    }
}

impl Drop for PointerListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("mousemove", self.callback.as_ref().unchecked_ref())
        {
            error!("Failed to remove pointer listener: {:?}", e);
        }
        debug!("Pointer listener removed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spotlight_follows_coordinates() {
        let style = PointerPosition { x: 120, y: 48 }.spotlight_style();
        assert!(style.contains("at 120px 48px"));
    }

    #[test]
    fn pointer_starts_at_origin() {
        assert_eq!(PointerPosition::default(), PointerPosition { x: 0, y: 0 });
    }
}
