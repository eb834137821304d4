use dispatch::{
    demo::options::{DemoOptions, DemoOptionsBuilder, Section},
    handler::{EntryPoint, Handle, Handler},
    subject::{AsSubject, Subject, VariantA, VariantC},
    transcript::{Event, Transcript},
};
use pretty_assertions::assert_eq;

fn run_to_string(args: &[&str]) -> String {
    let args = args.iter().map(|a| a.to_string()).collect::<Vec<_>>();
    let mut buf = Vec::new();
    dispatch::run_args(&args, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn dispatch_sections_match_reference_program() {
    let expected = "\
got a base object
Base myFunction called
got a variantA object
A myFunction called
got a variantB object
B myFunction called
got a base object
C myFunction called


got a base object
Base myFunction called
got a base object
A myFunction called
got a base object
B myFunction called
got a base object
C myFunction called


got a base object
Base myFunction called
got a variantA object
A myFunction called
got a variantB object
B myFunction called
got a base object
C myFunction called
";

    assert_eq!(
        run_to_string(&["--section", "direct,upcast,self-dispatch"]),
        expected
    );
}

#[test]
fn default_run_has_every_section() {
    let mut buf = Vec::new();
    dispatch::run(&DemoOptions::default(), &mut buf).unwrap();
    let out = String::from_utf8(buf).unwrap();

    assert!(out.contains("developer visiting office"));
    assert!(out.contains("CT: dyn Subject, RT: VariantC"));
    // four gaps of two blank lines
    assert_eq!(out.matches("\n\n\n").count(), 4);
}

#[test]
fn scenario_base_typed_references() {
    let handler = Handler;
    let a: &dyn Subject = &VariantA;
    let c: &dyn Subject = &VariantC;
    let mut out = Transcript::new();

    handler.handle(a, &mut out);
    a.dispatch_self_to(&handler, &mut out);
    c.dispatch_self_to(&handler, &mut out);
    handler.handle(&VariantA, &mut out);
    handler.handle(VariantC.as_subject(), &mut out);

    assert_eq!(
        out.events(),
        vec![
            Event::new(EntryPoint::Base, "A"),
            Event::new(EntryPoint::VariantA, "A"),
            Event::new(EntryPoint::Base, "C"),
            Event::new(EntryPoint::VariantA, "A"),
            Event::new(EntryPoint::Base, "C"),
        ]
    );
}

#[test]
fn headings_only_when_asked() {
    let options = DemoOptionsBuilder::default()
        .sections(vec![Section::Visitor])
        .build()
        .unwrap();
    let mut buf = Vec::new();
    dispatch::run(&options, &mut buf).unwrap();
    assert!(!String::from_utf8(buf).unwrap().contains("=="));

    let out = run_to_string(&["-s", "places", "--headings"]);
    assert!(out.starts_with("== place.accept(visitor) ==\n"));
}

#[test]
fn unknown_section_fails() {
    let mut buf = Vec::new();
    let err = dispatch::run_args(&[String::from("--section=bogus")], &mut buf).unwrap_err();
    assert!(err.to_string().contains("bogus"));
    assert!(buf.is_empty());
}
