//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use super::core::VoxApp;

/// Window-level key commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum KeyCommand {
    SwitchVariant,
    Remount,
    Quit,
}

impl KeyCommand {
    pub(super) fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Named(NamedKey::Space) => Some(Self::SwitchVariant),
            Key::Named(NamedKey::Escape) => Some(Self::Quit),
            Key::Character(c) if c.eq_ignore_ascii_case("r") => Some(Self::Remount),
            _ => None,
        }
    }
}

impl ApplicationHandler for VoxApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.host.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) || !self.mount() {
            self.shutdown();
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(ref mut host) = self.host {
                    host.dispatch_resize(size);
                }
            }

            // Re-measure at the new scale so the surface picks up the
            // display's pixel ratio on its next frame.
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(ref mut host) = self.host {
                    tracing::info!(scale_factor, "Display scale changed");
                    let size = host.window().inner_size();
                    host.dispatch_resize(size);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(ref host) = self.host {
                    host.dispatch_pointer(position);
                }
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        ref logical_key,
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match KeyCommand::from_key(logical_key) {
                Some(KeyCommand::SwitchVariant) => {
                    if !self.switch_variant() {
                        tracing::warn!(variant = %self.variant, "Variant switch left no visual mounted");
                    }
                }
                Some(KeyCommand::Remount) => {
                    if !self.remount() {
                        tracing::warn!("Remount left no visual mounted");
                    }
                }
                Some(KeyCommand::Quit) => {
                    self.shutdown();
                    event_loop.exit();
                }
                None => {}
            },

            WindowEvent::RedrawRequested => self.render_frame(),

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::SmolStr;

    #[test]
    fn key_commands() {
        assert_eq!(
            KeyCommand::from_key(&Key::Named(NamedKey::Space)),
            Some(KeyCommand::SwitchVariant)
        );
        assert_eq!(
            KeyCommand::from_key(&Key::Named(NamedKey::Escape)),
            Some(KeyCommand::Quit)
        );
        assert_eq!(
            KeyCommand::from_key(&Key::Character(SmolStr::new("R"))),
            Some(KeyCommand::Remount)
        );
        assert_eq!(
            KeyCommand::from_key(&Key::Character(SmolStr::new("r"))),
            Some(KeyCommand::Remount)
        );
        assert_eq!(KeyCommand::from_key(&Key::Character(SmolStr::new("x"))), None);
        assert_eq!(KeyCommand::from_key(&Key::Named(NamedKey::Enter)), None);
    }
}
