use std::collections::HashMap;
use std::env;
use std::fs;

/// группы бенчмарков
const GROUPS: [&str; 2] = ["to_ascii", "to_unicode"];

/// выведем результаты бенчмарка как CSV: строки - списки доменов, колонки - реализации
fn main()
{
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Использование: {} <файл с выводом cargo bench>", args[0]);
        return;
    }

    let contents = match fs::read_to_string(&args[1]) {
        Ok(contents) => contents,
        Err(e) => {
            println!("Не удалось прочитать файл: {}", e);
            return;
        }
    };

    for group in GROUPS {
        println!("{}:\n{}\n", group.to_uppercase(), make_csv(&contents, group));
    }
}

fn make_csv(source: &str, group: &str) -> String
{
    let source = parse_str(source, group);
    let (lists, variants) = get_rows_cols(&source);

    let mut result = String::new();

    for variant in variants.iter() {
        result.push_str(format!(";{}", variant).as_str());
    }
    result.push('\n');

    for list in lists.iter() {
        result.push_str(list);

        for variant in variants.iter() {
            let value = source
                .get(&format!("{}/{}/{}", group, variant, list))
                .unwrap_or(&0);

            result.push_str(format!(";{}", value).as_str());
        }

        result.push('\n');
    }

    result
}

/// строки вида "to_ascii/uts46/cyrillic  time:   [1.2345 µs 1.2400 µs 1.2456 µs]",
/// берём среднее значение в микросекундах
fn parse_str(source: &str, group: &str) -> HashMap<String, u32>
{
    let mut result = HashMap::new();

    for line in source.lines() {
        if !line.starts_with(group) {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();

        if parts.len() < 6 {
            continue;
        }

        let time = match parts[4].parse::<f64>() {
            Ok(time) => time,
            Err(_) => continue,
        };

        let time = match parts[5] {
            "ns" => time / 1000.0,
            "ms" => time * 1000.0,
            "s" => time * 1_000_000.0,
            _ => time,
        };

        result.insert(parts[0].to_owned(), time.trunc() as u32);
    }

    result
}

fn get_rows_cols(source: &HashMap<String, u32>) -> (Vec<String>, Vec<String>)
{
    let mut lists = vec![];
    let mut variants = vec![];

    for key in source.keys() {
        let parts: Vec<&str> = key.split('/').collect();

        if parts.len() != 3 {
            continue;
        }

        if !lists.contains(&parts[2].to_owned()) {
            lists.push(parts[2].to_owned());
        };

        if !variants.contains(&parts[1].to_owned()) {
            variants.push(parts[1].to_owned());
        };
    }

    lists.sort();
    variants.sort();

    (lists, variants)
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn csv()
    {
        let output = "\
to_ascii/uts46/cyrillic time:   [1.2000 µs 1.5000 µs 1.8000 µs]
to_ascii/idna/cyrillic  time:   [900.00 ns 950.00 ns 990.00 ns]
to_unicode/uts46/cyrillic time: [2.0000 ms 2.5000 ms 3.0000 ms]
";

        assert_eq!(make_csv(output, "to_ascii"), ";idna;uts46\ncyrillic;0;1\n");
        assert_eq!(make_csv(output, "to_unicode"), ";uts46\ncyrillic;2500\n");
    }
}
