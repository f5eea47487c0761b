//! Debug sink: линия машина → мяч + подпись с режимом FSM
//!
//! Рисование опционально. Ошибки sink'а не должны влиять на управление:
//! `Bot` только логирует их (один раз) и продолжает тик.

use bevy::prelude::*;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("renderer unavailable: {0}")]
    Unavailable(String),
    #[error("render group rejected: {0}")]
    Rejected(String),
}

pub trait DebugRenderer: Send + Sync {
    fn begin_rendering(&mut self) -> Result<(), RenderError>;
    fn draw_line_3d(&mut self, from: Vec3, to: Vec3) -> Result<(), RenderError>;
    fn draw_string_3d(&mut self, at: Vec3, text: &str) -> Result<(), RenderError>;
    fn end_rendering(&mut self) -> Result<(), RenderError>;
}

/// Один кадр overlay: линия до мяча и label над машиной
pub fn draw_debug(
    renderer: &mut dyn DebugRenderer,
    car: Vec3,
    ball: Vec3,
    label: &str,
) -> Result<(), RenderError> {
    renderer.begin_rendering()?;
    renderer.draw_line_3d(car, ball)?;
    renderer.draw_string_3d(car, label)?;
    renderer.end_rendering()
}

/// Sink без вывода (хост без overlay)
#[derive(Debug, Default)]
pub struct NullRenderer;

impl DebugRenderer for NullRenderer {
    fn begin_rendering(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    fn draw_line_3d(&mut self, _from: Vec3, _to: Vec3) -> Result<(), RenderError> {
        Ok(())
    }

    fn draw_string_3d(&mut self, _at: Vec3, _text: &str) -> Result<(), RenderError> {
        Ok(())
    }

    fn end_rendering(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}

/// Sink в logger: пишет label только когда он меняется (120Hz спам не нужен)
#[derive(Debug, Default)]
pub struct LogRenderer {
    last_label: Option<String>,
    pending_line: Option<(Vec3, Vec3)>,
}

impl LogRenderer {
    pub fn last_label(&self) -> Option<&str> {
        self.last_label.as_deref()
    }
}

impl DebugRenderer for LogRenderer {
    fn begin_rendering(&mut self) -> Result<(), RenderError> {
        self.pending_line = None;
        Ok(())
    }

    fn draw_line_3d(&mut self, from: Vec3, to: Vec3) -> Result<(), RenderError> {
        self.pending_line = Some((from, to));
        Ok(())
    }

    fn draw_string_3d(&mut self, at: Vec3, text: &str) -> Result<(), RenderError> {
        if self.last_label.as_deref() == Some(text) {
            return Ok(());
        }

        let distance = self
            .pending_line
            .map(|(from, to)| from.distance(to))
            .unwrap_or_default();
        crate::log(&format!(
            "🏷️ {} at ({:.0}, {:.0}, {:.0}), ball {:.0}uu away",
            text, at.x, at.y, at.z, distance
        ));
        self.last_label = Some(text.to_owned());
        Ok(())
    }

    fn end_rendering(&mut self) -> Result<(), RenderError> {
        self.pending_line = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_renderer_tracks_label() {
        let mut renderer = LogRenderer::default();
        draw_debug(&mut renderer, Vec3::ZERO, Vec3::new(0.0, 300.0, 93.0), "Chase").unwrap();
        assert_eq!(renderer.last_label(), Some("Chase"));

        draw_debug(&mut renderer, Vec3::ZERO, Vec3::ZERO, "Dodging").unwrap();
        assert_eq!(renderer.last_label(), Some("Dodging"));
    }

    #[test]
    fn test_draw_debug_stops_on_error() {
        struct Broken {
            strings: usize,
        }

        impl DebugRenderer for Broken {
            fn begin_rendering(&mut self) -> Result<(), RenderError> {
                Ok(())
            }
            fn draw_line_3d(&mut self, _from: Vec3, _to: Vec3) -> Result<(), RenderError> {
                Err(RenderError::Rejected("line".into()))
            }
            fn draw_string_3d(&mut self, _at: Vec3, _text: &str) -> Result<(), RenderError> {
                self.strings += 1;
                Ok(())
            }
            fn end_rendering(&mut self) -> Result<(), RenderError> {
                Ok(())
            }
        }

        let mut renderer = Broken { strings: 0 };
        let result = draw_debug(&mut renderer, Vec3::ZERO, Vec3::ONE, "Chase");
        assert_eq!(result, Err(RenderError::Rejected("line".into())));
        assert_eq!(renderer.strings, 0);
    }
}
