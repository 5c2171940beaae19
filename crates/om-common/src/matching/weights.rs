/// Weights of the five match factors. Skills dominate, past success is a small bonus.
pub const MATCH_WEIGHTS: Weights = Weights {
    skills: 0.45,
    interests: 0.25,
    availability: 0.15,
    location: 0.10,
    experience: 0.05,
};

#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub skills: f64,
    pub interests: f64,
    pub availability: f64,
    pub location: f64,
    pub experience: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills + self.interests + self.availability + self.location + self.experience
    }
}
