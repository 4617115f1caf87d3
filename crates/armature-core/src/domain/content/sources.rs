//! C++ sources: entry point, main header, implementation, test file.

use super::{cpp_comment, cpp_string};
use crate::domain::{
    entities::ProjectSpec,
    value_objects::{Archetype, ArchetypeFamily},
};

pub fn entry_point_path() -> String {
    "src/main.cpp".to_string()
}

pub fn header_path(spec: &ProjectSpec) -> String {
    format!("include/{}.h", spec.name())
}

pub fn implementation_path(spec: &ProjectSpec) -> String {
    format!("src/{}.cpp", spec.name())
}

pub fn test_file_path(spec: &ProjectSpec) -> String {
    format!("tests/test_{}.cpp", spec.name())
}

// ── src/main.cpp ─────────────────────────────────────────────────────────────

/// `None` for library archetypes.
pub fn entry_point(spec: &ProjectSpec) -> Option<String> {
    let name = spec.name();
    let class = spec.display_name();

    let content = match spec.archetype() {
        Archetype::ConsoleApp => {
            let survey = spec.features().survey_module;
            let mut s = format!("#include <iostream>\n#include \"../include/{name}.h\"\n");
            if survey {
                s.push_str("#include \"../include/LikertScale.h\"\n#include <vector>\n");
            }
            s.push_str(&format!(
                "\nint main() {{\n    std::cout << \"Launching {class} Application...\" << std::endl;\n\n"
            ));
            if survey {
                s.push_str(SURVEY_USAGE);
            }
            s.push_str(&format!("    {class} app;\n    return app.run();\n}}\n"));
            s
        }
        Archetype::GuiApp => format!(
            "#include <iostream>\n\
             #include \"../include/{name}.h\"\n\
             \n\
             // TODO: Include GUI framework headers (Qt, GTK, etc.)\n\
             \n\
             int main(int argc, char* argv[]) {{\n\
             \x20   (void)argc;\n\
             \x20   (void)argv;\n\
             \x20   std::cout << \"Launching {class} GUI Application...\" << std::endl;\n\
             \n\
             \x20   // TODO: Initialize GUI framework\n\
             \x20   {class} app;\n\
             \x20   return app.run();\n\
             }}\n"
        ),
        Archetype::UnitTestHarness => format!(
            "#include <iostream>\n\
             #include \"../include/{name}.h\"\n\
             \n\
             // Simple test runner; swap in Google Test or Catch2 as the suite grows\n\
             int main() {{\n\
             \x20   std::cout << \"Running {class} Tests...\" << std::endl;\n\
             \n\
             \x20   {class}Test test;\n\
             \x20   return test.runAllTests();\n\
             }}\n"
        ),
        Archetype::StaticLibrary | Archetype::SharedLibrary | Archetype::HeaderOnly => {
            return None;
        }
    };

    Some(content)
}

const SURVEY_USAGE: &str = r#"    // Example usage of LikertScale
    std::vector<std::string> options = {
        "Strongly Disagree",
        "Disagree",
        "Neutral",
        "Agree",
        "Strongly Agree"
    };
    LikertScale scale("The software was easy to use.", options);
    int response = scale.displayAndGetResponse();
    std::cout << "\nYou selected option: " << response << " - " << options[response - 1] << std::endl;

"#;

// ── include/<name>.h ─────────────────────────────────────────────────────────

pub fn header(spec: &ProjectSpec) -> String {
    let guard = spec.guard();
    let mut s = format!(
        "#ifndef {guard}\n#define {guard}\n\n#include <string>\n#include <vector>\n#include <memory>\n"
    );
    if spec.archetype() == Archetype::HeaderOnly {
        s.push_str("#include <iostream>\n");
    }
    s.push('\n');

    if !spec.description().is_empty() {
        s.push_str(&format!(
            "/**\n * {}\n * @author {}\n * @version {}\n */\n",
            cpp_comment(spec.description()),
            cpp_comment(spec.author()),
            spec.version()
        ));
    }

    match spec.archetype().family() {
        ArchetypeFamily::App => s.push_str(&app_class(spec)),
        ArchetypeFamily::Library if spec.archetype() == Archetype::HeaderOnly => {
            s.push_str(&inline_library_class(spec))
        }
        ArchetypeFamily::Library => s.push_str(&library_class(spec)),
        ArchetypeFamily::TestHarness => s.push_str(&harness_class(spec)),
    }

    s.push_str(&format!("\n#endif // {guard}\n"));
    s
}

fn app_class(spec: &ProjectSpec) -> String {
    let class = spec.display_name();
    format!(
        "class {class} {{\n\
         private:\n\
         \x20   std::string appName;\n\
         \x20   bool isRunning;\n\
         \n\
         public:\n\
         \x20   {class}();\n\
         \x20   ~{class}();\n\
         \n\
         \x20   int run();\n\
         \x20   void shutdown();\n\
         \n\
         \x20   // Core functionality\n\
         \x20   void initialize();\n\
         \x20   void update();\n\
         \x20   void cleanup();\n\
         }};\n"
    )
}

fn library_class(spec: &ProjectSpec) -> String {
    let class = spec.display_name();
    let utils = spec.utils_namespace();
    format!(
        "class {class} {{\n\
         private:\n\
         \x20   // Private members\n\
         \n\
         public:\n\
         \x20   {class}();\n\
         \x20   ~{class}();\n\
         \n\
         \x20   // Public API\n\
         \x20   void process();\n\
         \x20   std::string getVersion() const;\n\
         }};\n\
         \n\
         // Utility functions\n\
         namespace {utils} {{\n\
         \x20   void helperFunction();\n\
         }}\n"
    )
}

fn inline_library_class(spec: &ProjectSpec) -> String {
    let class = spec.display_name();
    let utils = spec.utils_namespace();
    let goal = spec.goal();
    let version = spec.version();
    format!(
        "class {class} {{\n\
         private:\n\
         \x20   // Private members\n\
         \n\
         public:\n\
         \x20   {class}() = default;\n\
         \x20   ~{class}() = default;\n\
         \n\
         \x20   // Public API\n\
         \x20   void process() {{\n\
         \x20       std::cout << \"Processing with {class}...\" << std::endl;\n\
         \x20       // TODO: Implement core functionality: {goal}\n\
         \x20   }}\n\
         \n\
         \x20   std::string getVersion() const {{\n\
         \x20       return \"{version}\";\n\
         \x20   }}\n\
         }};\n\
         \n\
         // Utility functions\n\
         namespace {utils} {{\n\
         \x20   inline void helperFunction() {{\n\
         \x20       // TODO: Implement helper functionality\n\
         \x20   }}\n\
         }}\n"
    )
}

fn harness_class(spec: &ProjectSpec) -> String {
    let class = spec.display_name();
    format!(
        "class {class}Test {{\n\
         private:\n\
         \x20   int passedTests;\n\
         \x20   int failedTests;\n\
         \n\
         \x20   void check(bool condition, const std::string& testName);\n\
         \n\
         public:\n\
         \x20   {class}Test();\n\
         \x20   ~{class}Test();\n\
         \n\
         \x20   int runAllTests();\n\
         \x20   void testBasicFunctionality();\n\
         \x20   void testEdgeCases();\n\
         \x20   void printResults();\n\
         }};\n"
    )
}

// ── src/<name>.cpp ───────────────────────────────────────────────────────────

/// `None` for header-only projects.
pub fn implementation(spec: &ProjectSpec) -> Option<String> {
    if !spec.archetype().has_sources() {
        return None;
    }

    let mut s = format!(
        "#include \"../include/{}.h\"\n#include <iostream>\n#include <stdexcept>\n\n",
        spec.name()
    );
    match spec.archetype().family() {
        ArchetypeFamily::App => s.push_str(&app_impl(spec)),
        ArchetypeFamily::Library => s.push_str(&library_impl(spec)),
        ArchetypeFamily::TestHarness => s.push_str(&harness_impl(spec)),
    }
    Some(s)
}

fn app_impl(spec: &ProjectSpec) -> String {
    let class = spec.display_name();
    let description = cpp_string(spec.description());
    let goal = spec.goal();
    format!(
        "{class}::{class}()\n\
         \x20   : appName(\"{class}\"), isRunning(false) {{\n\
         \x20   // Constructor implementation\n\
         }}\n\
         \n\
         {class}::~{class}() {{\n\
         \x20   cleanup();\n\
         }}\n\
         \n\
         int {class}::run() {{\n\
         \x20   try {{\n\
         \x20       initialize();\n\
         \x20       isRunning = true;\n\
         \n\
         \x20       std::cout << \"Running {description}...\" << std::endl;\n\
         \n\
         \x20       // Main application loop\n\
         \x20       while (isRunning) {{\n\
         \x20           update();\n\
         \x20           // TODO: Implement main logic: {goal}\n\
         \x20           break; // Remove this for continuous running\n\
         \x20       }}\n\
         \n\
         \x20       return 0;\n\
         \x20   }} catch (const std::exception& e) {{\n\
         \x20       std::cerr << \"Error: \" << e.what() << std::endl;\n\
         \x20       return 1;\n\
         \x20   }}\n\
         }}\n\
         \n\
         void {class}::initialize() {{\n\
         \x20   std::cout << \"Initializing \" << appName << \"...\" << std::endl;\n\
         \x20   // TODO: Add initialization logic\n\
         }}\n\
         \n\
         void {class}::update() {{\n\
         \x20   // TODO: Add update logic\n\
         }}\n\
         \n\
         void {class}::cleanup() {{\n\
         \x20   std::cout << \"Cleaning up \" << appName << \"...\" << std::endl;\n\
         \x20   // TODO: Add cleanup logic\n\
         }}\n\
         \n\
         void {class}::shutdown() {{\n\
         \x20   isRunning = false;\n\
         }}\n"
    )
}

fn library_impl(spec: &ProjectSpec) -> String {
    let class = spec.display_name();
    let utils = spec.utils_namespace();
    let goal = spec.goal();
    let version = spec.version();
    format!(
        "{class}::{class}() {{\n\
         \x20   // Constructor implementation\n\
         }}\n\
         \n\
         {class}::~{class}() {{\n\
         \x20   // Destructor implementation\n\
         }}\n\
         \n\
         void {class}::process() {{\n\
         \x20   std::cout << \"Processing with {class}...\" << std::endl;\n\
         \x20   // TODO: Implement core functionality: {goal}\n\
         }}\n\
         \n\
         std::string {class}::getVersion() const {{\n\
         \x20   return \"{version}\";\n\
         }}\n\
         \n\
         // Utility functions implementation\n\
         namespace {utils} {{\n\
         \x20   void helperFunction() {{\n\
         \x20       // TODO: Implement helper functionality\n\
         \x20   }}\n\
         }}\n"
    )
}

fn harness_impl(spec: &ProjectSpec) -> String {
    let class = spec.display_name();
    format!(
        "{class}Test::{class}Test()\n\
         \x20   : passedTests(0), failedTests(0) {{\n\
         \x20   // Test constructor\n\
         }}\n\
         \n\
         {class}Test::~{class}Test() {{\n\
         \x20   // Test destructor\n\
         }}\n\
         \n\
         int {class}Test::runAllTests() {{\n\
         \x20   std::cout << \"Running all tests for {class}...\" << std::endl;\n\
         \n\
         \x20   testBasicFunctionality();\n\
         \x20   testEdgeCases();\n\
         \n\
         \x20   printResults();\n\
         \x20   return (failedTests == 0) ? 0 : 1;\n\
         }}\n\
         \n\
         void {class}Test::testBasicFunctionality() {{\n\
         \x20   // TODO: Implement basic functionality tests\n\
         \x20   check(true, \"Basic functionality test\");\n\
         }}\n\
         \n\
         void {class}Test::testEdgeCases() {{\n\
         \x20   // TODO: Implement edge case tests\n\
         \x20   check(true, \"Edge cases test\");\n\
         }}\n\
         \n\
         void {class}Test::check(bool condition, const std::string& testName) {{\n\
         \x20   if (condition) {{\n\
         \x20       std::cout << \"[PASS] \" << testName << std::endl;\n\
         \x20       passedTests++;\n\
         \x20   }} else {{\n\
         \x20       std::cout << \"[FAIL] \" << testName << std::endl;\n\
         \x20       failedTests++;\n\
         \x20   }}\n\
         }}\n\
         \n\
         void {class}Test::printResults() {{\n\
         \x20   std::cout << \"\\nTest Results:\" << std::endl;\n\
         \x20   std::cout << \"Passed: \" << passedTests << std::endl;\n\
         \x20   std::cout << \"Failed: \" << failedTests << std::endl;\n\
         \x20   std::cout << \"Total: \" << (passedTests + failedTests) << std::endl;\n\
         }}\n"
    )
}

// ── tests/test_<name>.cpp ────────────────────────────────────────────────────

/// `None` when the archetype is the test harness itself.
pub fn test_file(spec: &ProjectSpec) -> Option<String> {
    if spec.archetype() == Archetype::UnitTestHarness {
        return None;
    }

    let name = spec.name();
    let class = spec.display_name();
    let lower = spec.lower_name();
    Some(format!(
        "#include \"../include/{name}.h\"\n\
         #include <iostream>\n\
         #include <cassert>\n\
         \n\
         // Simple test framework; consider Google Test or Catch2\n\
         \n\
         void test_{lower}_creation() {{\n\
         \x20   {class} obj;\n\
         \x20   (void)obj;\n\
         \x20   std::cout << \"[PASS] {class} creation test\" << std::endl;\n\
         }}\n\
         \n\
         void test_{lower}_functionality() {{\n\
         \x20   {class} obj;\n\
         \x20   (void)obj;\n\
         \x20   // TODO: Add specific functionality tests\n\
         \x20   std::cout << \"[PASS] {class} functionality test\" << std::endl;\n\
         }}\n\
         \n\
         int main() {{\n\
         \x20   std::cout << \"Running tests for {class}...\" << std::endl;\n\
         \n\
         \x20   test_{lower}_creation();\n\
         \x20   test_{lower}_functionality();\n\
         \n\
         \x20   std::cout << \"All tests passed!\" << std::endl;\n\
         \x20   return 0;\n\
         }}\n"
    ))
}
