mod quiz_vm;

pub use quiz_vm::{
    OptionVm, QuestionVm, QuizIntent, QuizScreen, ResultsVm, ReviewItemVm, StartVm, focus_target,
    intent_for_key, key_intent, map_quiz_screen,
};
