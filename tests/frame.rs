use chrono::{TimeZone, Utc};
use jst_clock::{
    Layout, Scene, TimeSource, Variant,
    core::{bounds::text_width, sampler::LoadSample},
    render::scene::FOOTER,
};

fn strip(s: &str) -> String {
    let mut out = String::new();
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn frame_lines(scene: &Scene, columns: usize) -> Vec<String> {
    let utc = Utc.with_ymd_and_hms(2026, 10, 17, 20, 15, 42).unwrap();
    let now = TimeSource::new(9.0).unwrap().at(utc);
    scene
        .frame(&now, columns)
        .as_str()
        .lines()
        .map(strip)
        .collect()
}

#[test]
fn classic_frame_layout() {
    let scene = Scene::new(Layout::builder(Variant::Classic).build().unwrap());
    let lines = frame_lines(&scene, 80);

    // date, 2 blanks, 21 dial rows, blank, time, blank, footer
    assert_eq!(lines.len(), 28);
    assert_eq!(lines[0].trim(), "2026年10月18日 (日)");
    assert!(lines[1].is_empty() && lines[2].is_empty());
    assert_eq!(lines[25].trim(), "05:15:42");
    assert_eq!(lines[27].trim(), FOOTER);

    // date is centred by display columns: 19 wide on 80
    assert!(lines[0].starts_with(&format!("{}2026", " ".repeat(30))));
    // footer is 13 columns wide
    assert!(lines[27].starts_with(&format!("{}Ctrl", " ".repeat(33))));

    // dial is centred as one block: 40 wide on 80 columns
    assert!(lines[3].starts_with(&" ".repeat(20)));
    assert!(lines[3..24].iter().any(|l| l.contains('●')));
    assert!(lines[3..24].iter().any(|l| l.contains("12")));
}

#[test]
fn monitor_frame_places_graphs_beside_the_clock() {
    let mut scene = Scene::new(Layout::builder(Variant::Monitor).build().unwrap());
    scene.record(LoadSample {
        cpu: 50.0,
        memory: 25.0,
    });
    let lines = frame_lines(&scene, 200);

    // date, 2 blanks, 18 composed rows, blank, footer
    assert_eq!(lines.len(), 23);
    let body = &lines[3..21];
    assert!(body.iter().all(|l| l.contains(" │ ")));
    assert!(body[0].contains("CPU  50.0%"));
    assert!(body[0].contains("MEM  25.0%"));
    assert!(body.iter().any(|l| l.contains("05:15:42")));
    assert!(body[1].contains(" 100%│"));
}

#[test]
fn composed_rows_are_never_truncated_on_narrow_terminals() {
    let scene = Scene::new(Layout::builder(Variant::Monitor).build().unwrap());
    let lines = frame_lines(&scene, 40);
    let widest = lines.iter().map(|l| text_width(l)).max().unwrap();
    assert!(widest > 40);
    // already at zero padding: a narrower terminal changes nothing
    assert_eq!(lines[3..21], frame_lines(&scene, 10)[3..21]);
}

#[test]
fn header_adds_a_banner() {
    let plain = Scene::new(Layout::builder(Variant::Classic).build().unwrap());
    let banner = Scene::new(
        Layout::builder(Variant::Classic)
            .header(true)
            .build()
            .unwrap(),
    );
    let a = frame_lines(&plain, 80);
    let b = frame_lines(&banner, 80);
    assert_eq!(b.len(), a.len() + 4);
    assert!(b[1].contains("日本標準時 (JST)"));
    assert!(b[..3].iter().all(|l| text_width(l) == 80));
}
