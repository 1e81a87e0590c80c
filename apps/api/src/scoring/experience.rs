/// Experience component: min(have / required, 1) × weight.
///
/// Over-qualification is capped at the full weight. `required_years` of 0 is
/// treated as 1.
pub fn experience_component(resume_years: u32, required_years: u32, weight: f64) -> f64 {
    let required = required_years.max(1);
    resume_years.min(required) as f64 * weight / required as f64
}
