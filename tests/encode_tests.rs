// GIF output written to disk

use std::fs::{self, File};
use std::io::BufReader;

use allocreplay::encode::replay_to_gif;
use allocreplay::timeline::progress::{NullProgress, ProgressObserver, TerminalProgress};
use allocreplay::{RenderConfig, Replay};
use image::codecs::gif::GifDecoder;
use image::AnimationDecoder;

const LOG: &str = "\
+ 0 256
+ 256 128
- 0 256
+ 64 64
+ 96 64
- 256 128
";

fn decode_file(path: &std::path::Path) -> Vec<image::Frame> {
    let file = File::open(path).expect("open gif");
    let decoder = GifDecoder::new(BufReader::new(file)).expect("valid gif");
    decoder.into_frames().collect_frames().expect("decode frames")
}

#[test]
fn test_write_gif_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("timeline.gif");

    let file = File::create(&path).unwrap();
    let written = replay_to_gif(Replay::from_log(LOG), file, NullProgress).unwrap();
    assert_eq!(written, 6);

    let frames = decode_file(&path);
    assert_eq!(frames.len(), 6);
    let dims = frames[0].buffer().dimensions();
    assert!(frames.iter().all(|f| f.buffer().dimensions() == dims));
}

#[test]
fn test_frame_delay() {
    let config = RenderConfig {
        frame_delay_ms: 50,
        ..RenderConfig::default()
    };
    let replay = Replay::from_log(LOG).with_config(config);

    let mut out = Vec::new();
    replay_to_gif(replay, &mut out, NullProgress).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("delay.gif");
    fs::write(&path, &out).unwrap();

    for frame in decode_file(&path) {
        let (numer, denom) = frame.delay().numer_denom_ms();
        assert_eq!(numer / denom, 50);
    }
}

#[test]
fn test_progress_goes_to_observer() {
    struct Count(usize, bool);
    impl ProgressObserver for Count {
        fn on_frame(&mut self, done: usize, _total: usize) {
            self.0 = done;
        }
        fn on_complete(&mut self, _total: usize) {
            self.1 = true;
        }
    }

    let mut count = Count(0, false);
    replay_to_gif(Replay::from_log(LOG), Vec::new(), &mut count).unwrap();
    assert_eq!(count.0, 6);
    assert!(count.1);
}

#[test]
fn test_terminal_progress_output() {
    let mut terminal = TerminalProgress::new(Vec::new());
    replay_to_gif(Replay::from_log("+ 0 1\n- 0 1\n"), Vec::new(), &mut terminal).unwrap();

    let text = String::from_utf8(terminal.into_inner()).unwrap();
    assert!(text.contains("50.00%\t[1/2]"));
    assert!(text.contains("100.00%\t[2/2]"));
    assert!(text.ends_with("ALL DONE\n"));
}
