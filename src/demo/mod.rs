pub mod err;
pub mod options;

use log::info;

use crate::{
    handler::{Handle, Handler},
    probe::TypeProbe,
    subject::{AsSubject, Base, Subject, VariantA, VariantB, VariantC},
    transcript::Transcript,
    visit::{tour, Apartment, Developer, GroceryStore, Office, Person, Visitable, Visitor},
};

use options::{DemoOptions, Section};

fn subjects() -> [&'static dyn Subject; 4] {
    [&Base, &VariantA, &VariantB, &VariantC]
}

pub fn run(options: &DemoOptions) -> Transcript {
    let handler = Handler;
    let mut out = Transcript::new();

    for (i, section) in options.sections.iter().enumerate() {
        if i > 0 {
            for _ in 0..options.gap {
                out.blank();
            }
        }
        if options.headings {
            out.heading(section.title());
        }

        info!("running section {section}");
        run_section(*section, &handler, &mut out);
    }

    out
}

pub fn run_section(section: Section, handler: &Handler, out: &mut Transcript) {
    match section {
        Section::Direct => {
            handler.handle(&Base, out);
            handler.handle(&VariantA, out);
            handler.handle(&VariantB, out);
            // no entry point of its own
            handler.handle(VariantC.as_subject(), out);
        }
        Section::Upcast => {
            for subject in subjects() {
                handler.handle(subject, out);
            }
        }
        Section::SelfDispatch => {
            for subject in subjects() {
                subject.dispatch_self_to(handler, out);
            }
        }
        Section::Visitor => {
            let places: Vec<Box<dyn Visitable>> =
                vec![Box::new(GroceryStore), Box::new(Apartment), Box::new(Office)];
            let mut developer = Developer::new();
            let mut person = Person::new();
            let mut visitors: [&mut dyn Visitor; 2] = [&mut developer, &mut person];
            tour(&places, &mut visitors, out);
        }
        Section::Types => {
            out.text(TypeProbe::of(&Base));
            out.text(TypeProbe::of(&VariantA));
            out.text(TypeProbe::of(&VariantB));
            out.text(TypeProbe::of(&VariantC));
            for subject in subjects() {
                out.text(TypeProbe::of(subject));
            }
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{options::DemoOptionsBuilder, run, run_section};
    use crate::{
        demo::options::Section,
        handler::{EntryPoint, Handler},
        transcript::{Event, Line, Transcript},
    };

    fn section(section: Section) -> Transcript {
        let mut out = Transcript::new();
        run_section(section, &Handler, &mut out);
        out
    }

    #[test]
    fn test_direct_section() {
        assert_eq!(
            section(Section::Direct).events(),
            vec![
                Event::new(EntryPoint::Base, "Base"),
                Event::new(EntryPoint::VariantA, "A"),
                Event::new(EntryPoint::VariantB, "B"),
                Event::new(EntryPoint::Base, "C"),
            ]
        );
    }

    #[test]
    fn test_upcast_section_only_reaches_base() {
        let events = section(Section::Upcast).events();
        assert_eq!(events.len(), 4);
        assert!(events.iter().all(|e| e.entry == EntryPoint::Base));
        assert_eq!(
            events.iter().map(|e| e.label).collect::<Vec<_>>(),
            vec!["Base", "A", "B", "C"]
        );
    }

    #[test]
    fn test_self_dispatch_section() {
        assert_eq!(
            section(Section::SelfDispatch).render(),
            vec![
                "got a base object",
                "Base myFunction called",
                "got a variantA object",
                "A myFunction called",
                "got a variantB object",
                "B myFunction called",
                "got a base object",
                "C myFunction called",
            ]
        );
    }

    #[test]
    fn test_types_section() {
        let rendered = section(Section::Types).render();
        assert_eq!(rendered.len(), 8);
        assert_eq!(rendered[1], "CT: VariantA, RT: VariantA");
        assert_eq!(rendered[5], "CT: dyn Subject, RT: VariantA");
    }

    #[test]
    fn test_gap_and_headings() {
        let options = DemoOptionsBuilder::default()
            .sections(vec![Section::Upcast, Section::SelfDispatch])
            .gap(1)
            .headings(true)
            .build()
            .unwrap();
        let out = run(&options);
        let lines = out.lines();

        assert_eq!(lines.len(), 1 + 8 + 1 + 1 + 8);
        assert_eq!(lines[0], Line::Heading(String::from("handle(&dyn Subject)")));
        assert_eq!(lines[9], Line::Blank);
        assert_eq!(
            lines[10],
            Line::Heading(String::from("dispatch_self_to(handler)"))
        );
    }
}
