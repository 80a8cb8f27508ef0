use anyhow::Result;
use std::path::{Path, PathBuf};
use std::process::Command;

struct CommandOutput {
    exit_code: i32,
    stderr: String,
}

fn run_tiktok_subs(input: &Path, output: &Path) -> Result<CommandOutput> {
    let out = Command::new(env!("CARGO_BIN_EXE_tiktok-subs"))
        .arg(input)
        .arg(output)
        .output()?;
    Ok(CommandOutput {
        exit_code: out.status.code().unwrap_or(-1),
        stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
    })
}

fn write(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, content)?;
    Ok(path)
}

#[test]
fn garbage_input_exits_with_error() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = write(dir.path(), "garbage.json", "{ not json\nstill not json")?;

    let output = run_tiktok_subs(&input, &dir.path().join("filter.txt"))?;
    assert_eq!(output.exit_code, 1, "stderr: {}", output.stderr);
    assert!(output.stderr.contains("[ERROR]"), "stderr: {}", output.stderr);
    Ok(())
}

#[test]
fn document_without_transcription_exits_with_error() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = write(dir.path(), "nofield.json", r#"{"result": {"language": "fr"}}"#)?;

    let output = run_tiktok_subs(&input, &dir.path().join("filter.txt"))?;
    assert_eq!(output.exit_code, 1, "stderr: {}", output.stderr);
    assert!(output.stderr.contains("No transcription found"), "stderr: {}", output.stderr);
    Ok(())
}

#[test]
fn blank_transcript_warns_and_writes_empty_filter() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = write(
        dir.path(),
        "blank.json",
        r#"{"transcription": [{"offsets": {"from": 0, "to": 1000}, "text": "  \t "}]}"#,
    )?;
    let filter = dir.path().join("filter.txt");

    let output = run_tiktok_subs(&input, &filter)?;
    assert_eq!(output.exit_code, 0, "stderr: {}", output.stderr);
    assert!(
        output.stderr.contains("[WARN] No text chunks created"),
        "stderr: {}",
        output.stderr
    );
    assert_eq!(std::fs::read_to_string(&filter)?, "");
    Ok(())
}

#[test]
fn five_word_segment_writes_two_captions() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = write(
        dir.path(),
        "whisper.json",
        r#"{"transcription": [{"text": "hello world foo bar baz", "offsets": {"from": 0, "to": 5000}}]}"#,
    )?;
    let filter = dir.path().join("filter.txt");

    let output = run_tiktok_subs(&input, &filter)?;
    assert_eq!(output.exit_code, 0, "stderr: {}", output.stderr);
    assert_eq!(
        std::fs::read_to_string(&filter)?,
        concat!(
            "drawtext=text='hello world foo':fontcolor=white:fontsize=60:bordercolor=black:",
            "borderw=4:x=(w-text_w)/2:y=(h-text_h)/2:enable='between(t,0.000,3.000)',",
            "drawtext=text='bar baz':fontcolor=white:fontsize=60:bordercolor=black:",
            "borderw=4:x=(w-text_w)/2:y=(h-text_h)/2:enable='between(t,3.000,5.000)'",
        )
    );
    Ok(())
}
