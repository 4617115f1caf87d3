//! Build descriptors. Exactly one of these is emitted per project.

use super::survey;
use crate::domain::{
    entities::ProjectSpec,
    value_objects::{Archetype, BuildSystem},
};

/// Descriptor for the spec's build system.
pub fn descriptor(spec: &ProjectSpec) -> String {
    match spec.build_system() {
        BuildSystem::CMake => cmake(spec),
        BuildSystem::Make => makefile(spec),
    }
}

// ── CMakeLists.txt ───────────────────────────────────────────────────────────

pub fn cmake(spec: &ProjectSpec) -> String {
    let name = spec.name();
    let archetype = spec.archetype();
    let survey = spec.features().survey_module;

    let mut s = format!(
        "cmake_minimum_required(VERSION 3.12)\n\
         project({name} VERSION {version} LANGUAGES CXX)\n\
         \n\
         set(CMAKE_CXX_STANDARD 17)\n\
         set(CMAKE_CXX_STANDARD_REQUIRED ON)\n\
         \n\
         # Include directories\n\
         include_directories(include)\n\
         \n",
        version = spec.version()
    );

    let mut sources = Vec::new();
    if archetype.has_entry_point() {
        sources.push("src/main.cpp".to_string());
    }
    if archetype.has_sources() {
        sources.push(format!("src/{name}.cpp"));
        if survey {
            sources.push(survey::SOURCE_PATH.to_string());
        }
    }
    let source_list: String = sources.iter().map(|s| format!("    {s}\n")).collect();

    match archetype {
        Archetype::ConsoleApp | Archetype::GuiApp => {
            s.push_str(&format!("# Executable\nadd_executable({name}\n{source_list})\n\n"));
        }
        Archetype::UnitTestHarness => {
            s.push_str(&format!("# Test runner\nadd_executable({name}\n{source_list})\n\n"));
        }
        Archetype::StaticLibrary => {
            s.push_str(&format!(
                "# Static Library\nadd_library({name} STATIC\n{source_list})\n\n"
            ));
        }
        Archetype::SharedLibrary => {
            s.push_str(&format!(
                "# Shared Library\nadd_library({name} SHARED\n{source_list})\n\n"
            ));
        }
        Archetype::HeaderOnly => {
            s.push_str(&format!(
                "# Header-only Library\nadd_library({name} INTERFACE)\n\
                 target_include_directories({name} INTERFACE include)\n\n"
            ));
        }
    }

    if spec.features().tests {
        s.push_str("# Tests\nenable_testing()\n");
        match archetype {
            Archetype::UnitTestHarness => {
                s.push_str(&format!("add_test(NAME {name} COMMAND {name})\n\n"));
            }
            Archetype::ConsoleApp | Archetype::GuiApp => {
                let mut test_sources = format!("    tests/test_{name}.cpp\n    src/{name}.cpp\n");
                if survey {
                    test_sources.push_str(&format!("    {}\n", survey::SOURCE_PATH));
                }
                s.push_str(&format!(
                    "add_executable({name}_tests\n{test_sources})\n\
                     add_test(NAME {name}_tests COMMAND {name}_tests)\n\n"
                ));
            }
            Archetype::StaticLibrary | Archetype::SharedLibrary | Archetype::HeaderOnly => {
                s.push_str(&format!(
                    "add_executable({name}_tests\n    tests/test_{name}.cpp\n)\n\
                     target_link_libraries({name}_tests PRIVATE {name})\n\
                     add_test(NAME {name}_tests COMMAND {name}_tests)\n\n"
                ));
            }
        }
    }

    if archetype != Archetype::HeaderOnly {
        s.push_str(&format!(
            "# Compiler flags\ntarget_compile_options({name} PRIVATE\n    -Wall -Wextra -Wpedantic\n)\n\n"
        ));
    }

    let mut headers = format!("include/{name}.h");
    if survey {
        headers.push(' ');
        headers.push_str(survey::HEADER_PATH);
    }

    s.push_str("# Installation\n");
    match archetype {
        Archetype::ConsoleApp | Archetype::GuiApp | Archetype::UnitTestHarness => {
            s.push_str(&format!("install(TARGETS {name} DESTINATION bin)\n"));
        }
        Archetype::StaticLibrary | Archetype::SharedLibrary => {
            s.push_str(&format!(
                "install(TARGETS {name}\n    ARCHIVE DESTINATION lib\n    LIBRARY DESTINATION lib\n    RUNTIME DESTINATION bin\n)\n"
            ));
        }
        Archetype::HeaderOnly => {}
    }
    s.push_str(&format!("install(FILES {headers} DESTINATION include)\n"));
    s
}

// ── Makefile ─────────────────────────────────────────────────────────────────

pub fn makefile(spec: &ProjectSpec) -> String {
    let name = spec.name();
    let archetype = spec.archetype();
    let tests = spec.emits_test_file();
    let test_file = format!("tests/test_{name}.cpp");

    let mut s = format!(
        "# Makefile for {name}\n\
         \n\
         CXX = g++\n\
         CXXFLAGS = -std=c++17 -Wall -Wextra -Wpedantic -Iinclude\n"
    );

    if archetype == Archetype::HeaderOnly {
        if tests {
            s.push_str(&format!("TEST_TARGET = {name}_tests\n"));
        }
        s.push_str(&format!(
            "PREFIX ?= /usr/local\n\
             \n\
             .PHONY: all clean debug release install{phony_test}\n\
             \n\
             all:\n\
             \t@echo \"{name} is header-only; nothing to build\"\n\
             \n\
             debug release: all\n\
             \n",
            phony_test = if tests { " test" } else { "" }
        ));
        if tests {
            s.push_str(&format!(
                "$(TEST_TARGET): {test_file}\n\
                 \t$(CXX) $(CXXFLAGS) $< -o $@\n\
                 \n\
                 test: $(TEST_TARGET)\n\
                 \t./$(TEST_TARGET)\n\
                 \n"
            ));
        }
        s.push_str(&format!(
            "clean:\n\
             \trm -f{clean_test}\n\
             \n\
             install:\n\
             \tmkdir -p $(PREFIX)/include\n\
             \tcp include/*.h $(PREFIX)/include/\n",
            clean_test = if tests { " $(TEST_TARGET)" } else { "" }
        ));
        return s;
    }

    let target = match archetype {
        Archetype::StaticLibrary => format!("lib{name}.a"),
        Archetype::SharedLibrary => format!("lib{name}.so"),
        _ => name.to_string(),
    };

    if archetype == Archetype::SharedLibrary {
        s.push_str("CXXFLAGS += -fPIC\n");
    }
    s.push_str(&format!(
        "SRCDIR = src\n\
         OBJDIR = obj\n\
         SOURCES = $(wildcard $(SRCDIR)/*.cpp)\n\
         OBJECTS = $(SOURCES:$(SRCDIR)/%.cpp=$(OBJDIR)/%.o)\n\
         TARGET = {target}\n"
    ));
    if tests {
        s.push_str(&format!("TEST_TARGET = {name}_tests\n"));
    }
    s.push_str(&format!(
        "PREFIX ?= /usr/local\n\
         \n\
         .PHONY: all clean debug release install{}\n\
         \n\
         all: $(TARGET)\n\
         \n",
        if tests { " test" } else { "" }
    ));

    let link = match archetype {
        Archetype::StaticLibrary => "\tar rcs $@ $^\n",
        Archetype::SharedLibrary => "\t$(CXX) -shared $(OBJECTS) -o $@\n",
        _ => "\t$(CXX) $(OBJECTS) -o $@\n",
    };
    s.push_str("$(TARGET): $(OBJECTS)\n");
    s.push_str(link);
    s.push_str(
        "\n\
         $(OBJDIR)/%.o: $(SRCDIR)/%.cpp | $(OBJDIR)\n\
         \t$(CXX) $(CXXFLAGS) -c $< -o $@\n\
         \n\
         $(OBJDIR):\n\
         \tmkdir -p $(OBJDIR)\n\
         \n\
         debug: CXXFLAGS += -g -DDEBUG\n\
         debug: $(TARGET)\n\
         \n\
         release: CXXFLAGS += -O3 -DNDEBUG\n\
         release: $(TARGET)\n\
         \n",
    );

    if tests {
        let rule = match archetype {
            Archetype::StaticLibrary => format!(
                "$(TEST_TARGET): {test_file} $(TARGET)\n\t$(CXX) $(CXXFLAGS) $^ -o $@\n"
            ),
            Archetype::SharedLibrary => format!(
                "$(TEST_TARGET): {test_file} $(TARGET)\n\
                 \t$(CXX) $(CXXFLAGS) $< -L. -l{name} -Wl,-rpath,. -o $@\n"
            ),
            _ => format!(
                "$(TEST_TARGET): {test_file} $(filter-out $(OBJDIR)/main.o,$(OBJECTS))\n\
                 \t$(CXX) $(CXXFLAGS) $^ -o $@\n"
            ),
        };
        s.push_str(&rule);
        s.push_str("\ntest: $(TEST_TARGET)\n\t./$(TEST_TARGET)\n\n");
    }

    s.push_str(&format!(
        "clean:\n\trm -rf $(OBJDIR) $(TARGET){}\n\n",
        if tests { " $(TEST_TARGET)" } else { "" }
    ));

    match archetype {
        Archetype::StaticLibrary | Archetype::SharedLibrary => s.push_str(
            "install: $(TARGET)\n\
             \tmkdir -p $(PREFIX)/lib $(PREFIX)/include\n\
             \tcp $(TARGET) $(PREFIX)/lib/\n\
             \tcp include/*.h $(PREFIX)/include/\n",
        ),
        _ => s.push_str(
            "install: $(TARGET)\n\
             \tmkdir -p $(PREFIX)/bin\n\
             \tcp $(TARGET) $(PREFIX)/bin/\n",
        ),
    }
    s
}
