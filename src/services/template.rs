//! The fixed fixture text. The downstream consumer only cares that the
//! files look like TypeScript and hit a target size, but the byte shape
//! is kept stable so sizes stay reproducible across runs.

pub const PREAMBLE: &str = "const variable1 = 1;\nconst variable2 = 2;\n\n";

/// Prefix of every generated function line; `inspect` keys off it.
pub const FN_PREFIX: &str = "function generatedFunction";

pub struct Preset {
    pub label: &'static str,
    pub file_name: &'static str,
    pub reps: u64,
}

pub const PRESETS: &[Preset] = &[
    Preset {
        label: "1mb",
        file_name: "test-file-1mb.ts",
        reps: 7_000,
    },
    Preset {
        label: "10mb",
        file_name: "test-file-10mb.ts",
        reps: 70_000,
    },
    Preset {
        label: "100mb",
        file_name: "test-file-100mb.ts",
        reps: 700_000,
    },
    Preset {
        label: "1gb",
        file_name: "test-file-1gb.ts",
        reps: 7_250_000,
    },
];

pub fn render_block(index: u64) -> String {
    let mut block = String::new();
    block.push_str(FN_PREFIX);
    block.push_str(&index.to_string());
    block.push_str("(parameter: number): number {\n");
    block.push_str("   let str: string = 'test';\n\n");
    block.push_str("   console.log(str);\n\n");
    block.push_str("   return parameter * 2;\n}\n\n");
    block
}

/// Exact byte length of one invocation's output for `reps` blocks.
pub fn fixture_len(reps: u64) -> u64 {
    let block_base = (render_block(0).len() - 1) as u64;
    PREAMBLE.len() as u64 + block_base * reps + digit_count_total(reps)
}

// total decimal digits across the indices 0..reps
fn digit_count_total(reps: u64) -> u64 {
    let mut total = 0;
    let mut lower = 0u64;
    let mut upper = 10u64;
    let mut width = 1u64;
    while lower < reps {
        total += (reps.min(upper) - lower) * width;
        lower = upper;
        upper = upper.saturating_mul(10);
        width += 1;
    }
    total
}
