/// The four coupling constants of the simulation's update equation.
///
/// `k_color` and `k_space` are the two knobs the driver wires to pointer
/// position; `dt` and `k_decay` are usually left at their preset values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    /// Forward-Euler time-step size.
    pub dt: f64,
    /// Linear decay applied to each cell's own color.
    pub k_decay: f64,
    /// Color-color coupling: weight of the stochastic rotational term.
    pub k_color: f64,
    /// Color-space coupling: weight of the 5-point Laplacian term.
    pub k_space: f64,
}

impl Default for Params {
    fn default() -> Self {
        presets::CLASSIC
    }
}

pub mod presets {
    use super::Params;

    /// The original tuning of the effect.
    pub const CLASSIC: Params = Params {
        dt: 0.1,
        k_decay: 0.02,
        k_color: 0.34,
        k_space: 1.1,
    };

    /// Diffusion-dominated; colors bleed into soft washes.
    pub const WATERCOLOR: Params = Params {
        dt: 0.1,
        k_decay: 0.02,
        k_color: 0.12,
        k_space: 1.6,
    };

    /// Rotation-dominated; cells churn faster than they blend.
    pub const STATIC_NOISE: Params = Params {
        dt: 0.1,
        k_decay: 0.01,
        k_color: 0.85,
        k_space: 0.3,
    };

    /// Heavy decay pulls the lattice toward black between flare-ups.
    pub const EMBERS: Params = Params {
        dt: 0.15,
        k_decay: 0.08,
        k_color: 0.4,
        k_space: 0.9,
    };
}
