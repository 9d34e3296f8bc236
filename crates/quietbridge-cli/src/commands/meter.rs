use quietbridge_core::{mood_to_num, MOOD_METER};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("Higher energy");
    for row in MOOD_METER {
        let cells: Vec<String> = row
            .iter()
            .map(|word| format!("{:<12}", format!("{word} ({})", mood_to_num(word))))
            .collect();
        println!("  {}", cells.join(" ").trim_end());
    }
    println!("Lower energy");
    Ok(())
}
