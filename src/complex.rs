#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { real: 0.0, imag: 0.0 };

    pub fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    pub fn square(&self) -> Self {
        Self {
            real: self.real * self.real - self.imag * self.imag,
            imag: 2.0 * self.real * self.imag,
        }
    }

    pub fn add(&self, other: &Complex) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }

    /// Squared magnitude.
    pub fn norm(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// Iterates `z <- z^2 + self` from zero and returns the number of completed
    /// iterations. The escape test runs against the previous iterate, before
    /// each step, so the first step always happens.
    pub fn escape_time(&self, max_iter: u32, escape_radius_sq: f64) -> u32 {
        self.last_iterate(max_iter, escape_radius_sq).0
    }

    /// Same loop as [`Complex::escape_time`], also returning the iterate the
    /// loop stopped on.
    pub fn last_iterate(&self, max_iter: u32, escape_radius_sq: f64) -> (u32, Complex) {
        let mut z = Self::ZERO;
        let mut counter = 0;
        while z.norm() < escape_radius_sq && counter < max_iter {
            z = z.square().add(self);
            counter += 1;
        }
        (counter, z)
    }
}
