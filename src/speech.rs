use std::env;
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

/// Nominal speaking rate the multiplier applies to, in words per minute.
const BASE_WPM: f32 = 175.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Backend {
    Say,
    EspeakNg,
    Espeak,
    SpdSay,
}

/// Thin pass-through to whatever speech synthesizer the host machine has.
/// Absence is tolerated silently: `is_available` gates the UI control and
/// nothing else happens. Playback runs on a spawned thread that holds the
/// busy flag for the lifetime of the child process.
pub struct SpeechEngine {
    backend: Option<Backend>,
    playing: Arc<AtomicBool>,
    rate: f32,
}

impl SpeechEngine {
    pub fn new(rate: f32) -> Self {
        Self {
            backend: detect_backend(),
            playing: Arc::new(AtomicBool::new(false)),
            rate,
        }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Relaxed)
    }

    /// Speak the text at the configured rate in an en-US voice. Returns
    /// immediately; the busy flag clears when the synthesizer exits. No
    /// retry and no queueing.
    pub fn speak(&self, text: &str) {
        let Some(backend) = self.backend else {
            return;
        };

        let mut command = build_command(backend, text, self.rate);
        self.playing.store(true, Ordering::Relaxed);

        let playing = Arc::clone(&self.playing);
        thread::spawn(move || {
            match command.spawn() {
                Ok(mut child) => {
                    let _ = child.wait();
                }
                Err(err) => {
                    log::warn!("speech synthesizer failed to start: {err}");
                }
            }
            playing.store(false, Ordering::Relaxed);
        });
    }
}

fn detect_backend() -> Option<Backend> {
    const CANDIDATES: &[(&str, Backend)] = &[
        ("say", Backend::Say),
        ("espeak-ng", Backend::EspeakNg),
        ("espeak", Backend::Espeak),
        ("spd-say", Backend::SpdSay),
    ];

    CANDIDATES
        .iter()
        .find(|(bin, _)| find_in_path(bin))
        .map(|(_, backend)| *backend)
}

fn find_in_path(bin: &str) -> bool {
    let Some(path) = env::var_os("PATH") else {
        return false;
    };
    env::split_paths(&path).any(|dir| Path::new(&dir).join(bin).is_file())
}

fn build_command(backend: Backend, text: &str, rate: f32) -> Command {
    let wpm = (BASE_WPM * rate).round() as i32;

    let mut command = match backend {
        Backend::Say => {
            let mut c = Command::new("say");
            c.arg("-r").arg(wpm.to_string()).arg(text);
            c
        }
        Backend::EspeakNg | Backend::Espeak => {
            let bin = if backend == Backend::EspeakNg {
                "espeak-ng"
            } else {
                "espeak"
            };
            let mut c = Command::new(bin);
            c.arg("-v")
                .arg("en-us")
                .arg("-s")
                .arg(wpm.to_string())
                .arg(text);
            c
        }
        Backend::SpdSay => {
            // spd-say takes a -100..100 rate; map the multiplier around 1.0.
            let relative = (((rate - 1.0) * 100.0).round() as i32).clamp(-100, 100);
            let mut c = Command::new("spd-say");
            c.arg("-l")
                .arg("en")
                .arg("-r")
                .arg(relative.to_string())
                .arg("-w")
                .arg(text);
            c
        }
    };

    // Keep synthesizer chatter off the alternate screen.
    command.stdout(Stdio::null()).stderr(Stdio::null());
    command
}
