use std::cell::Cell;
use std::fs;
use std::path::Path;

use sound_bank_lib::*;
use tempfile::TempDir;

fn touch(root: &Path, category: &str, file: &str, contents: &[u8]) {
    let dir = root.join(category);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file), contents).unwrap();
}

fn retro_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("sounds-src");
    touch(&root, "Beeps", "B.mp3", b"bbb");
    touch(&root, "Beeps", "A.mp3", b"aaa");
    touch(&root, "Music", "C.mp3", b"ccc");
    touch(&root, "Beeps", "readme.txt", b"not audio");
    tmp
}

fn config(tmp: &TempDir) -> BankConfig {
    BankConfig {
        bank_number: 4,
        base_sequence_number: 32,
        destination_prefix: Some(tmp.path().join("card").join("04")),
        output_format: OutputFormat::Copy,
        ..Default::default()
    }
}

fn quiet(_: PlanProgress) {}

#[test]
fn generates_expected_header_from_disk() {
    let tmp = retro_tree();
    let root = tmp.path().join("sounds-src");
    let plan = plan_bank(&FsSource, &root, &config(&tmp), &quiet).unwrap();

    let header = tmp.path().join("arcade_sounds.h");
    write_table(&header, &render_table(&plan.entries, "ArcadeSounds", CodeStyle::Decimal)).unwrap();

    assert_eq!(
        fs::read_to_string(&header).unwrap(),
        "#pragma once\n\nenum class ArcadeSounds : uint16_t {\n  beeps__a = 1056,\n  beeps__b = 1057\n};\n"
    );
}

#[test]
fn reruns_are_byte_identical() {
    let tmp = retro_tree();
    let root = tmp.path().join("sounds-src");
    let header = tmp.path().join("out.h");

    let first = plan_bank(&FsSource, &root, &config(&tmp), &quiet).unwrap();
    write_table(&header, &render_table(&first.entries, "ArcadeSounds", CodeStyle::Shifted)).unwrap();
    let bytes_a = fs::read(&header).unwrap();

    let second = plan_bank(&FsSource, &root, &config(&tmp), &quiet).unwrap();
    write_table(&header, &render_table(&second.entries, "ArcadeSounds", CodeStyle::Shifted)).unwrap();
    let bytes_b = fs::read(&header).unwrap();

    assert_eq!(bytes_a, bytes_b);
}

#[test]
fn missing_root_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let err = plan_bank(&FsSource, &tmp.path().join("absent"), &config(&tmp), &quiet).unwrap_err();
    assert!(matches!(err, BankError::InputNotFound { .. }));
    assert!(!tmp.path().join("card").exists());
}

#[test]
fn copy_transcoder_fills_card_layout() {
    let tmp = retro_tree();
    let root = tmp.path().join("sounds-src");
    let plan = plan_bank(&FsSource, &root, &config(&tmp), &quiet).unwrap();

    let summary = execute_transcodes(&plan, &CopyTranscoder, &|_| {}).unwrap();
    assert_eq!(summary.transcoded, 2);
    assert!(summary.failures.is_empty());

    let card = tmp.path().join("card").join("04");
    assert_eq!(fs::read(card.join("032.mp3")).unwrap(), b"aaa");
    assert_eq!(fs::read(card.join("033.mp3")).unwrap(), b"bbb");
    assert!(!card.join("034.mp3").exists());
}

/// Fails every other file, like a transcoder choking on a corrupt input.
struct Flaky {
    calls: Cell<usize>,
}

impl Transcoder for Flaky {
    fn name(&self) -> &str {
        "flaky"
    }

    fn transcode(&self, source: &Path, destination: &Path) -> Result<(), TranscodeError> {
        let n = self.calls.get();
        self.calls.set(n + 1);
        if n % 2 == 0 {
            Err(TranscodeError::Failed {
                program: "flaky".to_string(),
                status: "exit status: 1".to_string(),
                detail: format!("{}: Invalid data found", source.display()),
            })
        } else {
            fs::write(destination, b"ok")?;
            Ok(())
        }
    }
}

#[test]
fn transcode_failures_are_collected_per_item() {
    let tmp = retro_tree();
    let root = tmp.path().join("sounds-src");
    touch(&root, "Beeps", "D.mp3", b"ddd");
    let plan = plan_bank(&FsSource, &root, &config(&tmp), &quiet).unwrap();
    assert_eq!(plan.entries.len(), 3);

    let flaky = Flaky { calls: Cell::new(0) };
    let summary = execute_transcodes(&plan, &flaky, &|_| {}).unwrap();

    // Every item was attempted despite the first failure
    assert_eq!(flaky.calls.get(), 3);
    assert_eq!(summary.transcoded, 1);
    assert_eq!(summary.failures.len(), 2);
    assert_eq!(summary.failures[0].source, plan.entries[0].source);
    assert_eq!(summary.failures[1].destination, plan.entries[2].destination);
    assert!(summary.failures[0].message.contains("Invalid data"));
}

#[test]
fn unavailable_transcoder_aborts() {
    let tmp = retro_tree();
    let root = tmp.path().join("sounds-src");
    let plan = plan_bank(&FsSource, &root, &config(&tmp), &quiet).unwrap();

    let missing = FfmpegTranscoder::new(
        tmp.path().join("no-such-ffmpeg"),
        &OutputFormat::default(),
    )
    .unwrap();
    let err = execute_transcodes(&plan, &missing, &|_| {}).unwrap_err();
    assert!(matches!(err, BankError::TranscoderUnavailable { .. }));
}

#[test]
fn project_file_drives_multiple_banks() {
    let tmp = retro_tree();
    touch(&tmp.path().join("voices-src"), "Announcer", "Round One.mp3", b"r1");
    let project_path = tmp.path().join("banks.toml");
    fs::write(
        &project_path,
        r#"
[[banks]]
root = "sounds-src"
header = "include/arcade_sounds.h"
bank_number = 4
base_sequence_number = 32

[[banks]]
root = "voices-src"
header = "include/voices.h"
bank_number = 5
enum_name = "Voices"
"#,
    )
    .unwrap();

    let project = load_project(&project_path).unwrap();
    let mut headers = Vec::new();
    for job in &project.banks {
        let plan = plan_bank(&FsSource, &job.root, &job.bank, &quiet).unwrap();
        write_table(
            &job.header,
            &render_table(&plan.entries, &job.bank.enum_name, job.bank.code_style),
        )
        .unwrap();
        headers.push(fs::read_to_string(&job.header).unwrap());
    }

    assert!(headers[0].contains("  beeps__b = 1057\n"));
    assert!(headers[1].contains("enum class Voices : uint16_t {\n  announcer__round_one = 1281\n"));
}
