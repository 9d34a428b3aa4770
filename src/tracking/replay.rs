use super::*;
use anyhow::Context;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

/// Plays back detector output recorded as JSON Lines, one frame per line.
///
/// ```text
/// {"hands":[{"score":0.93,"landmarks":[{"x":0.5,"y":0.9}, ...]}]}
/// {"hands":[]}
/// ```
pub struct Replay<R> {
    lines: std::io::Lines<R>,
    line: usize,
}

impl Replay<BufReader<std::fs::File>> {
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("open recording {}", path.display()))?;
        log::info!("replaying frames from {}", path.display());
        Ok(Self::from(BufReader::new(file)))
    }
}

impl<R> From<R> for Replay<R>
where
    R: BufRead,
{
    fn from(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl<R> Detector for Replay<R>
where
    R: BufRead,
{
    fn next(&mut self) -> anyhow::Result<Option<Frame>> {
        for line in self.lines.by_ref() {
            self.line += 1;
            let line = line.with_context(|| format!("read line {}", self.line))?;
            if line.trim().is_empty() {
                continue;
            }
            return serde_json::from_str::<Frame>(&line)
                .with_context(|| format!("parse frame on line {}", self.line))
                .map(Some);
        }
        Ok(None)
    }
    fn release(&mut self) {
        log::debug!("replay released after {} lines", self.line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::Fingers;
    use crate::hand::HandPose;

    fn line(pattern: &str, score: f32) -> String {
        let pose = HandPose::from(Fingers::try_from(pattern).unwrap());
        let frame = Frame::from(vec![Detection::from((score, pose))]);
        serde_json::to_string(&frame).unwrap()
    }

    #[test]
    fn reads_frames_in_order() {
        let text = [line("00000", 0.9), String::new(), line("11111", 0.95)].join("\n");
        let mut replay = Replay::from(text.as_bytes());
        let first = replay.next().unwrap().unwrap();
        let second = replay.next().unwrap().unwrap();
        assert_eq!(first.hands[0].landmarks.fingers(), Fingers::try_from("00000").unwrap());
        assert_eq!(second.hands[0].landmarks.fingers(), Fingers::try_from("11111").unwrap());
        assert_eq!(second.hands[0].score, 0.95);
        assert!(replay.next().unwrap().is_none());
    }

    #[test]
    fn reports_bad_line_number() {
        let text = [line("00000", 0.9), "{\"hands\":[{\"landmarks\":[]}]}".to_string()].join("\n");
        let mut replay = Replay::from(text.as_bytes());
        assert!(replay.next().is_ok());
        let error = replay.next().unwrap_err();
        assert!(format!("{:#}", error).contains("line 2"));
    }

    #[test]
    fn open_missing_file_fails() {
        assert!(Replay::open("does/not/exist.jsonl").is_err());
    }
}
