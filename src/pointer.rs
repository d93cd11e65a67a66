#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn from_client(client_x: f64, client_y: f64, viewport_width: f64, viewport_height: f64) -> Self {
        if !(viewport_width > 0.0 && viewport_height > 0.0) {
            return Self::default();
        }

        Self {
            x: (client_x / viewport_width * 2.0 - 1.0).clamp(-1.0, 1.0),
            y: (-(client_y / viewport_height) * 2.0 + 1.0).clamp(-1.0, 1.0),
        }
    }

    pub fn particle_transform(self) -> String {
        format!("translate({:.2}px, {:.2}px)", self.x * 20.0, self.y * 20.0)
    }

    pub fn primary_wave_style(self) -> String {
        format!(
            "background: radial-gradient(circle at {:.2}% {:.2}%, hsl(var(--primary)) 0%, transparent 50%); transform: scale({:.3});",
            50.0 + self.x * 10.0,
            50.0 + self.y * 10.0,
            1.0 + (self.x + self.y).abs() * 0.1,
        )
    }

    pub fn secondary_wave_style(self) -> String {
        format!(
            "background: radial-gradient(ellipse at {:.2}% {:.2}%, hsl(var(--accent)) 0%, transparent 60%); transform: scale({:.3}) rotate({:.2}deg);",
            30.0 - self.x * 20.0,
            70.0 - self.y * 20.0,
            1.2 + self.y.abs() * 0.1,
            self.x * 10.0,
        )
    }
}
