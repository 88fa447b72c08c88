/// The class selected from a consumer's output, paired with its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub class: usize,
    pub score: f32,
}

/// Select the index with the highest score.
///
/// Ties resolve to the lowest index. NaN scores never win. Returns `None`
/// if `scores` is empty or contains only NaN.
pub fn argmax(scores: &[f32]) -> Option<Prediction> {
    let mut best: Option<Prediction> = None;
    for (class, &score) in scores.iter().enumerate() {
        if score.is_nan() {
            continue;
        }
        match best {
            Some(b) if b.score >= score => {}
            _ => best = Some(Prediction { class, score }),
        }
    }
    best
}
