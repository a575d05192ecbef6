use qce_lib::{qce_read, ConsentStatus, GateEngine, Wave};

struct Case {
    lines: &'static [&'static str],
    hash: &'static str,
    intent: f64,
    discordance: f64,
    waves: &'static [Wave],
    consent: f64,
    status: ConsentStatus,
    reasons: usize,
}

const CASES: &[Case] = &[
    Case {
        lines: &["", "ฉันรู้ พร้อมแล้ว"],
        hash: "bbf77b4c45552ade",
        intent: 0.88,
        discordance: 0.15,
        waves: &[Wave::Gamma],
        consent: 0.882,
        status: ConsentStatus::Granted,
        reasons: 2,
    },
    Case {
        lines: &["", "อาจจะ ไม่แน่ใจ"],
        hash: "95d7e76ba786d81a",
        intent: 0.23,
        discordance: 0.75,
        waves: &[Wave::Alpha],
        consent: 0.294,
        status: ConsentStatus::Denied,
        reasons: 3,
    },
    Case {
        lines: &["ตอนนี้ใจนิ่ง สงบ รู้โดยไม่พูด", "ฉันยืนยันว่าพร้อมแล้ว"],
        hash: "547c38ce23c760aa",
        intent: 1.0,
        discordance: 0.03,
        waves: &[Wave::Alpha, Wave::Theta, Wave::Gamma],
        consent: 1.0,
        status: ConsentStatus::Granted,
        reasons: 4,
    },
    Case {
        lines: &["เพราะเหตุผลทางตรรกะ ขั้นตอนนี้ต้องวิเคราะห์ข้อเท็จจริงให้ครบถ้วนก่อน"],
        hash: "6fd44eb9c5ccdf2d",
        intent: 0.53,
        discordance: 0.35,
        waves: &[Wave::Beta],
        consent: 0.37,
        status: ConsentStatus::Denied,
        reasons: 1,
    },
    Case {
        lines: &["I know I am ready and I confirm"],
        hash: "24d9c49b41931699",
        intent: 0.68,
        discordance: 0.15,
        waves: &[Wave::Alpha],
        consent: 0.62,
        status: ConsentStatus::NeedsClarification,
        reasons: 1,
    },
    Case {
        lines: &["เหนื่อย อยากพัก หลับสักหน่อย ช่วงนี้ร่างกายล้ามาก"],
        hash: "31a438c14bfcb6a6",
        intent: 0.5,
        discordance: 0.3,
        waves: &[Wave::Delta],
        consent: 0.342,
        status: ConsentStatus::Denied,
        reasons: 0,
    },
    Case {
        lines: &["ไม่ต้องพูดก็เข้าใจ ความจริงอยู่ภายใน"],
        hash: "bbb3b12544eb1c66",
        intent: 0.65,
        discordance: 0.1,
        waves: &[Wave::Theta],
        consent: 0.64,
        status: ConsentStatus::NeedsClarification,
        reasons: 1,
    },
];

#[test]
fn worked_examples_match() {
    for case in CASES {
        let result = qce_read(case.lines);
        assert_eq!(result.input_hash, case.hash, "{:?}", case.lines);
        assert_eq!(result.intent, case.intent, "{:?}", case.lines);
        assert_eq!(result.discordance, case.discordance, "{:?}", case.lines);
        assert_eq!(result.waves, case.waves, "{:?}", case.lines);
        assert_eq!(result.consent_score, case.consent, "{:?}", case.lines);
        assert_eq!(result.status, case.status, "{:?}", case.lines);
        assert_eq!(result.reasons.len(), case.reasons, "{:?}", case.lines);
    }
}

#[test]
fn empty_input_is_denied_with_alpha() {
    let result = qce_read::<&str>(&[]);
    assert_eq!(result.input_hash, "e3b0c44298fc1c14");
    assert_eq!(result.waves, vec![Wave::Alpha]);
    assert_eq!(result.consent_score, 0.43);
    assert_eq!(result.status, ConsentStatus::Denied);
}

#[test]
fn scores_stay_bounded_and_waves_non_empty() {
    let inputs: &[&[&str]] = &[
        &[],
        &[""],
        &["maybe maybe maybe อาจจะ ไม่แน่ใจ ลังเล"],
        &["แก่น", "ตกลง", "ยืนยัน"],
        &["ไม่ ไม่ ไม่ ไม่ ไม่ ไม่ ไม่ ไม่"],
        &["I know, I confirm, ready, yes, agree, sure"],
    ];
    for lines in inputs {
        let result = qce_read(*lines);
        for value in [result.intent, result.discordance, result.consent_score] {
            assert!((0.0..=1.0).contains(&value), "{lines:?} -> {value}");
        }
        assert!(!result.waves.is_empty());
        assert_eq!(result.input_hash.len(), 16);
        assert!(result.input_hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}

#[test]
fn identical_input_gives_identical_output() {
    let lines = ["ตอนนี้ใจนิ่ง สงบ", "ฉันยืนยันว่าพร้อมแล้ว"];
    let first = qce_read(lines.as_slice());
    let second = qce_read(lines.as_slice());
    assert_eq!(first, second);
}

#[test]
fn legacy_gate_examples() {
    let gate = GateEngine::default();
    assert!(gate.evaluate(0.9, 0.5, "alpha"));
    assert!(!gate.evaluate(1.0, 0.0, "theta"));
    assert!(!gate.evaluate(0.87, 0.5, "beta"));
    assert!(!gate.evaluate(0.9, 0.71, "alpha"));
}
