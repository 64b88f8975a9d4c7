//! Arabic display strings. Numbers are always rendered with Arabic-Indic digits.

use quiz_core::model::{Question, ScoreBand};
use quiz_core::numerals::to_local_digits;

#[must_use]
pub fn status_icon(completed: bool) -> &'static str {
    if completed { "✅" } else { "🔒" }
}

#[must_use]
pub fn question_text(question: &Question) -> String {
    format!(
        "{} × {}",
        to_local_digits(question.a()),
        to_local_digits(question.b())
    )
}

#[must_use]
pub fn score_line(score: u32) -> String {
    format!("الدرجة: {}/٥", to_local_digits(score))
}

#[must_use]
pub fn progress_line(position: usize, total: usize) -> String {
    format!(
        "السؤال {} من {}",
        to_local_digits(position),
        to_local_digits(total)
    )
}

#[must_use]
pub fn feedback_text(is_correct: bool) -> &'static str {
    if is_correct {
        "أحسنت! إجابة صحيحة."
    } else {
        "للأسف، إجابة غير صحيحة."
    }
}

#[must_use]
pub fn result_text(score: u32, total: usize, band: ScoreBand) -> String {
    let prefix = match band {
        ScoreBand::Excellent => "ممتاز!",
        ScoreBand::Great => "رائع!",
        ScoreBand::Good => "جيد!",
        ScoreBand::TryAgain => "حاول مجددًا!",
    };
    format!(
        "{prefix} نتيجتك هي {}/{}",
        to_local_digits(score),
        to_local_digits(total)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_use_arabic_digits() {
        assert_eq!(score_line(3), "الدرجة: ٣/٥");
        assert_eq!(progress_line(2, 5), "السؤال ٢ من ٥");
        assert_eq!(question_text(&Question::new(8, 10).unwrap()), "٨ × ١٠");
    }

    #[test]
    fn result_prefix_follows_band() {
        assert_eq!(result_text(5, 5, ScoreBand::Excellent), "ممتاز! نتيجتك هي ٥/٥");
        assert_eq!(result_text(4, 5, ScoreBand::Great), "رائع! نتيجتك هي ٤/٥");
        assert_eq!(result_text(3, 5, ScoreBand::Good), "جيد! نتيجتك هي ٣/٥");
        assert_eq!(result_text(0, 5, ScoreBand::TryAgain), "حاول مجددًا! نتيجتك هي ٠/٥");
    }
}
