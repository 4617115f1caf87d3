//! Optional Likert-scale survey module.

pub const HEADER_PATH: &str = "include/LikertScale.h";
pub const SOURCE_PATH: &str = "src/LikertScale.cpp";

pub fn header() -> String {
    format!("{HEADER_OPEN}{DECLARATION}{HEADER_CLOSE}")
}

pub fn implementation() -> String {
    format!("#include \"../include/LikertScale.h\"\n#include <iostream>\n#include <limits>\n\n{DEFINITIONS}")
}

/// Single header for header-only projects, definitions marked `inline`.
pub fn inline_header() -> String {
    let definitions = DEFINITIONS
        .replacen("LikertScale::LikertScale", "inline LikertScale::LikertScale", 1)
        .replacen("int LikertScale::", "inline int LikertScale::", 1);
    format!(
        "{HEADER_OPEN}{DECLARATION}\n#include <iostream>\n#include <limits>\n\n{definitions}{HEADER_CLOSE}"
    )
}

const HEADER_OPEN: &str = "#ifndef LIKERT_SCALE_H\n#define LIKERT_SCALE_H\n\n#include <string>\n#include <vector>\n\n";

const HEADER_CLOSE: &str = "\n#endif // LIKERT_SCALE_H\n";

const DECLARATION: &str = r#"/**
 * @class LikertScale
 * @brief Displays a Likert scale question and reads a response.
 */
class LikertScale {
public:
    /**
     * @brief Construct a new Likert Scale object
     * @param question The question to ask the user.
     * @param options The scale options (e.g., "Strongly Disagree" to "Strongly Agree").
     */
    LikertScale(const std::string& question, const std::vector<std::string>& options);

    /**
     * @brief Displays the question and options, then waits for and validates user input.
     * @return The user's choice as an integer (1-based index).
     */
    int displayAndGetResponse();

private:
    std::string question_;
    std::vector<std::string> options_;
};
"#;

const DEFINITIONS: &str = r#"LikertScale::LikertScale(const std::string& question, const std::vector<std::string>& options)
    : question_(question), options_(options) {}

int LikertScale::displayAndGetResponse() {
    std::cout << "\n" << question_ << std::endl;
    for (size_t i = 0; i < options_.size(); ++i) {
        std::cout << "  " << (i + 1) << ". " << options_[i] << std::endl;
    }

    int response = 0;
    while (true) {
        std::cout << "Enter your choice (1-" << options_.size() << "): ";
        std::cin >> response;

        if (std::cin.good() && response >= 1 && response <= static_cast<int>(options_.size())) {
            // Clear the input buffer
            std::cin.ignore(std::numeric_limits<std::streamsize>::max(), '\n');
            return response;
        }
        std::cin.clear();
        std::cin.ignore(std::numeric_limits<std::streamsize>::max(), '\n');
        std::cout << "Invalid input. Please enter a number between 1 and " << options_.size() << "." << std::endl;
    }
}
"#;
