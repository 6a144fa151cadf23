pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

/// сколько раз повторить список доменов из файла
pub const REPEAT: usize = 100;

#[macro_export]
macro_rules! group {
    ($dir: expr, $fn: ident, $test: ident, $group: expr, $name: expr, $convert: expr) => {
        #[inline(never)]
        fn $test(domains: &[String]) -> usize
        {
            domains.iter().map(|domain| ($convert)(domain.as_str())).sum()
        }

        fn $fn(c: &mut Criterion)
        {
            let mut group = c.benchmark_group($group);

            group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

            for data in group::read_dir($dir) {
                let list_name = data.0.as_str();
                let domains = data.1.as_slice();

                group.bench_with_input(
                    criterion::BenchmarkId::new($name, &list_name),
                    domains,
                    |b, domains| b.iter(|| $test(criterion::black_box(domains))),
                );
            }

            group.finish();
        }
    };
}

/// прочитать папку со списками доменов
pub fn read_dir(dir: &str) -> Vec<(String, Vec<String>)>
{
    let dir = std::fs::read_dir(dir).unwrap();

    let mut data: Vec<(String, Vec<String>)> = vec![];

    for entry in dir {
        let entry = entry.unwrap();

        let path = entry.path();
        let path = path.to_str().unwrap();

        data.push((get_name(path).to_owned(), read(path, REPEAT)));
    }

    data.sort_by(|a, b| a.0.cmp(&b.0));

    data
}

/// прочитать домены из файла, повторив список n раз
fn read(source: &str, times: usize) -> Vec<String>
{
    let buffer = std::fs::read_to_string(source).unwrap();

    let domains: Vec<&str> = buffer
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut result = Vec::with_capacity(domains.len() * times);

    for _ in 0 .. times {
        result.extend(domains.iter().map(|&d| d.to_owned()));
    }

    result
}

/// вырезать из полного пути к файлу его название, без формата
fn get_name(filename: &str) -> &str
{
    let (_, name) = filename.trim_end_matches(".txt").rsplit_once('/').unwrap();

    name
}
