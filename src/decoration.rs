use crate::capability::CapabilityState;
use crate::nav::SectionId;
use fastrand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ranges {
    pub size_px: (f64, f64),
    pub duration_sec: (f64, f64),
    pub delay_sec: (f64, f64),
}

pub const SHAPE_RANGES: Ranges = Ranges {
    size_px: (20.0, 80.0),
    duration_sec: (15.0, 35.0),
    delay_sec: (0.0, 10.0),
};

pub const PARTICLE_RANGES: Ranges = Ranges {
    size_px: (2.0, 8.0),
    duration_sec: (15.0, 35.0),
    delay_sec: (0.0, 10.0),
};

pub const HERO_PARTICLE_RANGES: Ranges = Ranges {
    size_px: (2.0, 8.0),
    duration_sec: (15.0, 35.0),
    delay_sec: (0.0, 20.0),
};

pub const PULSE_RANGES: Ranges = Ranges {
    size_px: (8.0, 8.0),
    duration_sec: (2.0, 4.0),
    delay_sec: (0.0, 3.0),
};

pub const POSITION_RANGE: (f64, f64) = (0.0, 100.0);

const BRAND_PALETTE: &[&str] = &[
    "hsl(var(--primary))",
    "hsl(var(--accent))",
    "hsl(var(--primary) / 0.7)",
    "hsl(var(--accent) / 0.7)",
];

const NO_PALETTE: &[&str] = &[];

// Half the hero particles take the blue tint.
const HERO_PALETTE: &[&str] = &["hsl(var(--foreground) / 0.6)", "hsl(var(--primary))"];

const SKILLS_PALETTE: &[&str] = &["#3b82f6", "#8b5cf6", "#06b6d4", "#10b981", "#f59e0b"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Triangle,
}

impl ShapeKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Circle => "shape-circle",
            Self::Triangle => "shape-triangle",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Shapes,
    Particles,
    HeroParticles,
    Pulse,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shapes => "shapes",
            Self::Particles => "particles",
            Self::HeroParticles => "hero_particles",
            Self::Pulse => "pulse",
        }
    }

    pub fn ranges(self) -> Ranges {
        match self {
            Self::Shapes => SHAPE_RANGES,
            Self::Particles => PARTICLE_RANGES,
            Self::HeroParticles => HERO_PARTICLE_RANGES,
            Self::Pulse => PULSE_RANGES,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DecorativeElement {
    pub kind: ShapeKind,
    pub size_px: f64,
    pub left_percent: f64,
    pub top_percent: f64,
    pub animation_duration_sec: f64,
    pub animation_delay_sec: f64,
    pub color: Option<&'static str>,
}

impl DecorativeElement {
    pub fn style(&self) -> String {
        let mut style = format!(
            "width: {size:.1}px; height: {size:.1}px; left: {left:.2}%; top: {top:.2}%; animation-duration: {duration:.2}s; animation-delay: {delay:.2}s;",
            size = self.size_px,
            left = self.left_percent,
            top = self.top_percent,
            duration = self.animation_duration_sec,
            delay = self.animation_delay_sec,
        );

        if let Some(color) = self.color {
            style.push_str(&format!(" background: {color};"));
        }

        style
    }
}

fn uniform(rng: &mut Rng, (low, high): (f64, f64)) -> f64 {
    low + rng.f64() * (high - low)
}

fn element(
    rng: &mut Rng,
    kind: ShapeKind,
    ranges: Ranges,
    color: Option<&'static str>,
) -> DecorativeElement {
    DecorativeElement {
        kind,
        size_px: uniform(rng, ranges.size_px),
        left_percent: uniform(rng, POSITION_RANGE),
        top_percent: uniform(rng, POSITION_RANGE),
        animation_duration_sec: uniform(rng, ranges.duration_sec),
        animation_delay_sec: uniform(rng, ranges.delay_sec),
        color,
    }
}

pub fn generate(
    variant: Variant,
    count: usize,
    palette: &[&'static str],
    rng: &mut Rng,
) -> Vec<DecorativeElement> {
    (0..count)
        .map(|_| match variant {
            Variant::Shapes => {
                let kind = if rng.bool() {
                    ShapeKind::Circle
                } else {
                    ShapeKind::Triangle
                };
                element(rng, kind, variant.ranges(), None)
            }
            Variant::Particles | Variant::HeroParticles | Variant::Pulse => {
                let color = (!palette.is_empty()).then(|| palette[rng.usize(..palette.len())]);
                element(rng, ShapeKind::Circle, variant.ranges(), color)
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct DecorationSet {
    variant: Variant,
    elements: Vec<DecorativeElement>,
}

impl DecorationSet {
    pub fn new(
        variant: Variant,
        count: usize,
        palette: &[&'static str],
        rng: &mut Rng,
    ) -> Self {
        Self {
            variant,
            elements: generate(variant, count, palette, rng),
        }
    }

    /// Rebuilds only when the variant or the count changed; a rebuild uses the
    /// palette passed here. Returns `true` when the sequence was rebuilt.
    pub fn regenerate(
        &mut self,
        variant: Variant,
        count: usize,
        palette: &[&'static str],
        rng: &mut Rng,
    ) -> bool {
        if variant == self.variant && count == self.elements.len() {
            return false;
        }

        self.variant = variant;
        self.elements = generate(variant, count, palette, rng);
        true
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn elements(&self) -> &[DecorativeElement] {
        &self.elements
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecorationPlan {
    pub particle_variant: Variant,
    pub particles: usize,
    pub shapes: usize,
    pub palette: &'static [&'static str],
}

impl DecorationPlan {
    pub fn for_section(section: SectionId, capability: &CapabilityState) -> Self {
        let mobile = capability.is_mobile();
        let (desktop_particles, mobile_particles, desktop_shapes, palette) = match section {
            SectionId::Hero => (150, 50, 0, HERO_PALETTE),
            SectionId::Summary => (
                30,
                15,
                6,
                if mobile { &BRAND_PALETTE[..2] } else { BRAND_PALETTE },
            ),
            SectionId::Skills => (
                40,
                20,
                0,
                if mobile { &SKILLS_PALETTE[..3] } else { SKILLS_PALETTE },
            ),
            SectionId::Education => (18, 10, 10, NO_PALETTE),
            SectionId::Projects => (25, 15, 12, NO_PALETTE),
            SectionId::Volunteering => (20, 12, 8, NO_PALETTE),
        };

        let particles = if mobile { mobile_particles } else { desktop_particles };
        let shapes = if mobile || capability.reduced_motion {
            0
        } else {
            desktop_shapes
        };

        let particle_variant = match section {
            SectionId::Hero => Variant::HeroParticles,
            _ => Variant::Particles,
        };

        Self {
            particle_variant,
            particles: capability.scaled_count(particles),
            shapes,
            palette,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{CapabilityInputs, MotionPolicy};

    fn within((low, high): (f64, f64), value: f64) -> bool {
        (low..=high).contains(&value)
    }

    fn assert_bounded(elements: &[DecorativeElement], ranges: Ranges) {
        for element in elements {
            assert!(within(POSITION_RANGE, element.left_percent), "{element:?}");
            assert!(within(POSITION_RANGE, element.top_percent), "{element:?}");
            assert!(within(ranges.size_px, element.size_px), "{element:?}");
            assert!(within(ranges.duration_sec, element.animation_duration_sec), "{element:?}");
            assert!(within(ranges.delay_sec, element.animation_delay_sec), "{element:?}");
        }
    }

    fn capability(width: u32, prefers_reduced_motion: bool) -> CapabilityState {
        CapabilityState::classify(
            CapabilityInputs {
                width,
                height: 900,
                hardware_concurrency: Some(8),
                prefers_reduced_motion,
            },
            MotionPolicy {
                low_end_cores: 2,
                mobile_low_end_reduces_motion: true,
            },
        )
    }

    #[test]
    fn zero_count_is_empty() {
        let mut rng = Rng::with_seed(1);
        assert!(generate(Variant::Shapes, 0, &[], &mut rng).is_empty());
        assert!(generate(Variant::Particles, 0, SKILLS_PALETTE, &mut rng).is_empty());
    }

    #[test]
    fn shapes_stay_within_ranges() {
        let mut rng = Rng::with_seed(7);
        for count in [1, 8, 500] {
            let shapes = generate(Variant::Shapes, count, &[], &mut rng);
            assert_eq!(shapes.len(), count);
            assert_bounded(&shapes, SHAPE_RANGES);
        }
    }

    #[test]
    fn particles_stay_within_ranges_and_palette() {
        let mut rng = Rng::with_seed(11);
        let particles = generate(Variant::Particles, 300, SKILLS_PALETTE, &mut rng);

        assert_eq!(particles.len(), 300);
        assert_bounded(&particles, PARTICLE_RANGES);
        assert!(particles.iter().all(|p| p.kind == ShapeKind::Circle));
        assert!(particles
            .iter()
            .all(|p| p.color.is_some_and(|color| SKILLS_PALETTE.contains(&color))));
    }

    #[test]
    fn particles_without_palette_have_no_color() {
        let mut rng = Rng::with_seed(3);
        let particles = generate(Variant::Particles, 20, &[], &mut rng);
        assert!(particles.iter().all(|p| p.color.is_none()));
    }

    #[test]
    fn shape_kinds_are_roughly_balanced() {
        let mut rng = Rng::with_seed(42);
        let shapes = generate(Variant::Shapes, 2_000, &[], &mut rng);
        let circles = shapes.iter().filter(|s| s.kind == ShapeKind::Circle).count();

        assert!((800..=1_200).contains(&circles), "circles: {circles}");
    }

    #[test]
    fn same_count_keeps_sequence() {
        let mut rng = Rng::with_seed(5);
        let mut set = DecorationSet::new(Variant::Shapes, 6, &[], &mut rng);
        let before = set.elements().to_vec();

        assert!(!set.regenerate(Variant::Shapes, 6, NO_PALETTE, &mut rng));
        assert_eq!(set.elements(), &before[..]);
    }

    #[test]
    fn new_count_rebuilds_sequence() {
        let mut rng = Rng::with_seed(5);
        let mut set = DecorationSet::new(Variant::Particles, 6, BRAND_PALETTE, &mut rng);

        assert!(set.regenerate(Variant::Particles, 10, SKILLS_PALETTE, &mut rng));
        assert_eq!(set.elements().len(), 10);
        assert_bounded(set.elements(), PARTICLE_RANGES);
        assert!(set
            .elements()
            .iter()
            .all(|p| p.color.is_some_and(|color| SKILLS_PALETTE.contains(&color))));

        assert!(set.regenerate(Variant::Particles, 0, SKILLS_PALETTE, &mut rng));
        assert!(set.elements().is_empty());
    }

    #[test]
    fn new_variant_rebuilds_at_same_count() {
        let mut rng = Rng::with_seed(9);
        let mut set = DecorationSet::new(Variant::Particles, 12, &[], &mut rng);

        assert!(set.regenerate(Variant::Shapes, 12, &[], &mut rng));
        assert_eq!(set.variant(), Variant::Shapes);
        assert_eq!(set.elements().len(), 12);
        assert_bounded(set.elements(), SHAPE_RANGES);

        assert!(!set.regenerate(Variant::Shapes, 12, &[], &mut rng));
    }

    #[test]
    fn pulse_dots_are_fixed_size_and_quick() {
        let mut rng = Rng::with_seed(21);
        let dots = generate(Variant::Pulse, 200, &[], &mut rng);

        assert_bounded(&dots, PULSE_RANGES);
        assert!(dots.iter().all(|dot| dot.size_px == 8.0));
        assert!(dots.iter().all(|dot| dot.animation_duration_sec <= 4.0));
        assert!(dots.iter().all(|dot| dot.animation_delay_sec <= 3.0));
    }

    #[test]
    fn hero_particles_spread_delays_and_tint_half() {
        let plan = DecorationPlan::for_section(SectionId::Hero, &capability(1440, false));
        assert_eq!(plan.particle_variant, Variant::HeroParticles);

        let mut rng = Rng::with_seed(33);
        let particles = generate(plan.particle_variant, 2_000, plan.palette, &mut rng);
        assert_bounded(&particles, HERO_PARTICLE_RANGES);
        assert!(particles.iter().any(|p| p.animation_delay_sec > 10.0));

        let blue = particles
            .iter()
            .filter(|p| p.color == Some("hsl(var(--primary))"))
            .count();
        assert!((800..=1_200).contains(&blue), "blue: {blue}");
    }

    #[test]
    fn style_carries_geometry_and_timing() {
        let element = DecorativeElement {
            kind: ShapeKind::Triangle,
            size_px: 40.0,
            left_percent: 12.5,
            top_percent: 80.0,
            animation_duration_sec: 20.0,
            animation_delay_sec: 1.5,
            color: Some("#3b82f6"),
        };

        assert_eq!(
            element.style(),
            "width: 40.0px; height: 40.0px; left: 12.50%; top: 80.00%; animation-duration: 20.00s; animation-delay: 1.50s; background: #3b82f6;"
        );
    }

    #[test]
    fn mobile_plan_drops_shapes_and_trims_palette() {
        let plan = DecorationPlan::for_section(SectionId::Summary, &capability(375, false));
        assert_eq!(plan.particles, 15);
        assert_eq!(plan.shapes, 0);
        assert_eq!(plan.palette.len(), 2);
    }

    #[test]
    fn desktop_plan_uses_full_budget() {
        let plan = DecorationPlan::for_section(SectionId::Projects, &capability(1440, false));
        assert_eq!(plan.particles, 25);
        assert_eq!(plan.shapes, 12);
    }

    #[test]
    fn reduced_motion_plan_scales_down() {
        let plan = DecorationPlan::for_section(SectionId::Hero, &capability(1440, true));
        assert_eq!(plan.particles, 45);
        assert_eq!(plan.shapes, 0);
    }
}
