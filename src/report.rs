use crate::vocab::WordCounts;
use textplots::{Chart, Plot, Shape};

/// The `n` most frequent words, highest count first, ties by word.
pub fn top_words(word_counts: &WordCounts, n: usize) -> Vec<(&str, usize)> {
    let mut ranked: Vec<(&str, usize)> = word_counts
        .iter()
        .map(|(word, &count)| (word.as_str(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(n);
    ranked
}

fn rank_frequency_points(word_counts: &WordCounts) -> Vec<(f32, f32)> {
    top_words(word_counts, word_counts.len())
        .iter()
        .enumerate()
        .map(|(rank, &(_, count))| ((rank + 1) as f32, (count as f32).log10()))
        .collect()
}

/// Zipf plot: log10(count) against frequency rank.
pub fn display_frequencies(word_counts: &WordCounts) {
    if word_counts.is_empty() {
        return;
    }
    let points = rank_frequency_points(word_counts);
    let max_rank = points.len().max(2) as f32;
    Chart::new(100, 40, 1.0, max_rank)
        .lineplot(&Shape::Lines(&points))
        .display();
}
