error_chain! {
    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        MissingArgument(program: String) {
            description("no integer argument provided")
            display("Usage: {} <int>", program)
        }

        ParseError(literal: String) {
            description("argument is not an integer literal")
            display("Invalid integer literal: {}", literal)
        }

        OutOfRange(literal: String) {
            description("integer does not fit in 32 unsigned bits")
            display("Invalid integer: {} (expected a value in [0x00, 0xffffffff])", literal)
        }

        ShortInput(got: usize) {
            description("not enough bytes for a word")
            display("expected 4 bytes, got {}", got)
        }
    }
}
