//! `quickcheck` generators for model types.

use quickcheck::{Arbitrary, Gen};

use super::application::{Application, TextField};
use super::controller::FieldEdit;
use super::position::Position;
use super::skill::Skill;

impl Arbitrary for Position {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(Position::all()).unwrap()
    }
}

impl Arbitrary for Skill {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(Skill::all()).unwrap()
    }
}

impl Arbitrary for TextField {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[
            TextField::FullName,
            TextField::Email,
            TextField::PhoneNumber,
            TextField::RelevantExperience,
            TextField::PortfolioUrl,
            TextField::ManagementExperience,
            TextField::PreferredInterviewTime,
        ])
        .unwrap()
    }
}

/// Mixes plausible form input with arbitrary noise.
fn field_text(g: &mut Gen) -> String {
    let samples = [
        "",
        "0",
        "2",
        "-1",
        "abc",
        "a@b.co",
        "https://ex.com",
        "2024-01-01T10:00",
    ];
    if bool::arbitrary(g) {
        (*g.choose(&samples).unwrap()).to_string()
    } else {
        String::arbitrary(g)
    }
}

impl Arbitrary for FieldEdit {
    fn arbitrary(g: &mut Gen) -> Self {
        match u8::arbitrary(g) % 3 {
            0 => FieldEdit::Text(TextField::arbitrary(g), field_text(g)),
            1 => FieldEdit::Position(Position::arbitrary(g)),
            _ => FieldEdit::Skill(Skill::arbitrary(g), bool::arbitrary(g)),
        }
    }
}

impl Arbitrary for Application {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut app = Application {
            full_name: field_text(g),
            email: field_text(g),
            phone_number: field_text(g),
            position: Position::arbitrary(g),
            relevant_experience: field_text(g),
            portfolio_url: field_text(g),
            management_experience: field_text(g),
            preferred_interview_time: field_text(g),
            ..Application::default()
        };
        for &skill in Skill::all() {
            app.additional_skills.set(skill, bool::arbitrary(g));
        }
        app
    }
}
