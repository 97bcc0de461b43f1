// Shared by the bench targets; each target uses a subset, hence the allows.

/// One page exercising every block type, repeated `pages` times.
#[allow(dead_code)]
pub fn blog_posts(pages: usize) -> String {
    let page = "# Post title\n\n\
                ## Intro\n\n\
                A paragraph with **bold**, _italic_ and a [link](https://example.com).\n\
                It wraps onto a second line.\n\n\
                - first point\n- second `point`\n\n\
                1. one\n2. two\n\n\
                > quoted\n> wisdom\n\n\
                ```rust\nfn main() {\n    println!(\"hi\");\n}\n```\n\n";
    page.repeat(pages)
}

/// A long document of `chapters` chapters with nested headings, image-heavy
/// lists and an occasional code block.
#[allow(dead_code)]
pub fn handbook(chapters: usize) -> String {
    let mut doc = String::new();
    for chapter in 0..chapters {
        doc.push_str(&format!("# Chapter {chapter}\n\n"));
        for depth in 2..=6 {
            push_subsection(&mut doc, depth);
        }
    }
    doc
}

fn push_subsection(doc: &mut String, depth: usize) {
    doc.push_str(&format!("{} Part at depth {depth}\n\n", "#".repeat(depth)));
    doc.push_str("Body text with **emphasis** and `inline code`, long enough to look like prose.\n\n");

    let items: Vec<String> = (1..=3)
        .map(|n| format!("{n}. Figure {n} ![figure {n}](/img/{depth}-{n}.png)"))
        .collect();
    doc.push_str(&items.join("\n"));
    doc.push_str("\n\n");

    if depth % 2 == 0 {
        doc.push_str("```\nlet total = items.iter().sum::<u32>();\n```\n\n");
    }
}
