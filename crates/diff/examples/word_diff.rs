use twin_diff::{render_inline, DiffLineKind, FileDiff};

fn main() {
    env_logger::init();

    let code1 = "function calculateTotal(items) {\n    let sum = 0;\n    for (let i = 0; i < items.length; i++) {\n        sum += items[i].price;\n    }\n    return sum;\n}";
    let code2 = "function calculateTotal(items) {\n    let sum = 0;\n    for (let i = 0; i < items.length; i++) {\n        sum += items[i].price * items[i].quantity;\n    }\n    return total;\n}";

    let diff = FileDiff::new(code1, code2);

    println!("=== Paired lines (word level) ===");
    for (index, line) in diff.lines().iter().enumerate() {
        if line.kind != DiffLineKind::Removed {
            continue;
        }
        match diff.segments(index) {
            Some(segments) => println!(
                "{:>4} | {}",
                line.old_line_no.unwrap_or_default(),
                render_inline(segments)
            ),
            None => println!("{:>4} | [-{}-]", line.old_line_no.unwrap_or_default(), line.content),
        }
    }

    println!("\n=== Each side ===");
    for (index, line) in diff.lines().iter().enumerate() {
        let Some(segments) = diff.segments(index) else {
            continue;
        };
        let visible: Vec<&str> = segments
            .iter()
            .filter(|segment| segment.visible_on(line.kind.side()))
            .map(|segment| segment.value.as_str())
            .collect();
        println!("{:>8}: {:?}", line.kind.to_string(), visible);
    }

    println!("\n=== Segments ===");
    for (index, line) in diff.lines().iter().enumerate() {
        if line.kind != DiffLineKind::Removed {
            continue;
        }
        if let Some(segments) = diff.segments(index) {
            for segment in segments {
                println!("{:>8}: {:?}", segment.kind.to_string(), segment.value);
            }
            println!();
        }
    }
}
