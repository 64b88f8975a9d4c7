//! Feedback cues synthesized in the WebView with the Web Audio API.

use dioxus::document::eval;
use services::{AudioError, AudioPlayer, Cue};

/// Plays cues by evaluating a short Web Audio script.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalAudio;

impl AudioPlayer for EvalAudio {
    fn play(&self, cue: Cue) -> Result<(), AudioError> {
        let script = cue_script(cue);
        let _ = eval(&script);
        Ok(())
    }
}

/// Notes as `(frequency_hz, start_s, length_s)`.
fn notes(cue: Cue) -> &'static [(u32, f32, f32)] {
    match cue {
        Cue::Correct => &[(523, 0.0, 0.12), (659, 0.12, 0.12), (784, 0.24, 0.2)],
        Cue::Incorrect => &[(220, 0.0, 0.18), (165, 0.18, 0.3)],
    }
}

pub(crate) fn cue_script(cue: Cue) -> String {
    let tones = notes(cue)
        .iter()
        .map(|(freq, start, len)| format!("[{freq},{start},{len}]"))
        .collect::<Vec<_>>()
        .join(",");
    let wave = match cue {
        Cue::Correct => "sine",
        Cue::Incorrect => "square",
    };
    format!(
        r#"(function() {{
            const Ctx = window.AudioContext || window.webkitAudioContext;
            if (!Ctx) {{ return; }}
            const ctx = window.__quizAudio || (window.__quizAudio = new Ctx());
            const now = ctx.currentTime;
            for (const [freq, start, len] of [{tones}]) {{
                const osc = ctx.createOscillator();
                const gain = ctx.createGain();
                osc.type = "{wave}";
                osc.frequency.value = freq;
                gain.gain.setValueAtTime(0.15, now + start);
                gain.gain.exponentialRampToValueAtTime(0.001, now + start + len);
                osc.connect(gain).connect(ctx.destination);
                osc.start(now + start);
                osc.stop(now + start + len);
            }}
        }})();"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripts_differ_per_cue() {
        let correct = cue_script(Cue::Correct);
        let incorrect = cue_script(Cue::Incorrect);
        assert!(correct.contains("[523,0,0.12]"), "{correct}");
        assert!(correct.contains("\"sine\""));
        assert!(incorrect.contains("\"square\""));
        assert_ne!(correct, incorrect);
    }
}
