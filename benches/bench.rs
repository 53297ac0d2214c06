use bencher::{benchmark_group, benchmark_main, Bencher};

use cws_readers::{cut_long_sentence, LoadOptions, PlainTextReader};

benchmark_group!(benches, split_long, plain_lines);
benchmark_main!(benches);

fn split_long(bench: &mut Bencher) {
    let sentence = (0..400).map(|_| "团员").collect::<Vec<_>>().join(" ");
    bench.iter(|| cut_long_sentence(&sentence, 200));
}

fn plain_lines(bench: &mut Bencher) {
    let corpus = "这是 fastNLP , 一个 非常 good 的 包 .\n".repeat(256);
    let reader = PlainTextReader::new();
    bench.iter(|| {
        let mut out: Vec<String> = Vec::new();
        reader
            .read_into(corpus.as_bytes(), LoadOptions::default(), &mut out)
            .unwrap();
        out
    });
}
