mod choices;
mod ids;
mod question;
mod score;

pub use choices::{CHOICES_PER_QUESTION, ChoiceSet, make_choices};
pub use ids::{ParseIdError, ParticipantId, ROSTER_SIZE};
pub use question::{
    QUESTIONS_PER_SESSION, Question, QuestionError, QuestionSet, generate_questions,
    question_seed,
};
pub use score::ScoreBand;
