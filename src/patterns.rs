//! Static suggestion table: language -> ordered (predicate, canned response)
//! pairs. First matching pattern wins, so order within a language matters.
//! Adding a language or pattern is a data-only change in `PatternTable::new`.

#[derive(Clone)]
pub struct Pattern {
    pub matches: fn(&str) -> bool,
    pub response: &'static str,
}

#[derive(Clone)]
pub struct LanguagePatternSet {
    pub language: &'static str,
    pub patterns: Vec<Pattern>,
}

#[derive(Clone)]
pub struct PatternTable {
    languages: Vec<LanguagePatternSet>,
}

impl PatternTable {
    pub fn new() -> Self {
        Self {
            languages: vec![
                LanguagePatternSet {
                    language: "typescript",
                    patterns: vec![
                        Pattern {
                            matches: |code| code.contains("function"),
                            response: TS_FUNCTION,
                        },
                        Pattern {
                            matches: |code| code.contains("class"),
                            response: TS_CLASS,
                        },
                        Pattern {
                            matches: |code| code.contains("interface"),
                            response: TS_INTERFACE,
                        },
                        Pattern {
                            matches: |code| code.contains("async"),
                            response: TS_ASYNC,
                        },
                    ],
                },
                LanguagePatternSet {
                    language: "javascript",
                    patterns: vec![
                        Pattern {
                            matches: |code| code.contains("function"),
                            response: JS_FUNCTION,
                        },
                        Pattern {
                            matches: |code| code.contains("class"),
                            response: JS_CLASS,
                        },
                    ],
                },
                LanguagePatternSet {
                    language: "html",
                    patterns: vec![
                        Pattern {
                            matches: |code| code.contains("<div"),
                            response: HTML_DIV,
                        },
                        Pattern {
                            matches: |code| code.contains("<form"),
                            response: HTML_FORM,
                        },
                    ],
                },
                LanguagePatternSet {
                    language: "css",
                    patterns: vec![
                        Pattern {
                            matches: |code| code.contains(".container"),
                            response: CSS_CONTAINER,
                        },
                        Pattern {
                            matches: |code| code.contains("@media"),
                            response: CSS_MEDIA,
                        },
                    ],
                },
            ],
        }
    }

    /// Total function: every (code, language) pair yields some text.
    /// Unknown languages and unmatched code degrade to placeholder messages.
    pub fn resolve(&self, code: &str, language: &str) -> String {
        let Some(set) = self.languages.iter().find(|set| set.language == language) else {
            return format!("// No suggestions available for {}", language);
        };

        for pattern in &set.patterns {
            if (pattern.matches)(code) {
                return pattern.response.to_string();
            }
        }

        format!(
            "// No specific suggestions found for your {} code.\n// Try adding more code or using different patterns.",
            language
        )
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::new()
    }
}

const TS_FUNCTION: &str = r##"// Here's an improved version of your function
function improvedFunction(param: any): any {
  // Input validation
  if (!param) throw new Error('Parameter is required');
  
  // Your logic here
  const result = processData(param);
  
  return result;
}

// Helper function
function processData(data: any): any {
  return data;
}"##;

const TS_CLASS: &str = r##"// Here's a better class structure
class ImprovedClass {
  private data: any;

  constructor(initialData: any) {
    this.data = initialData;
  }

  public getData(): any {
    return this.data;
  }

  public setData(newData: any): void {
    this.data = newData;
  }
}

// Usage example
const instance = new ImprovedClass('test');"##;

const TS_INTERFACE: &str = r##"// Here's an enhanced interface design
interface BaseModel {
  id: string;
  createdAt: Date;
  updatedAt: Date;
}

interface YourInterface extends BaseModel {
  name: string;
  description?: string;
  status: 'active' | 'inactive';
  
  // Method signatures
  validate(): boolean;
  toJSON(): Record<string, any>;
}"##;

const TS_ASYNC: &str = r##"// Here's a better async function pattern
async function improvedAsyncFunction(): Promise<void> {
  try {
    // Start with input validation
    const data = await fetchData();
    
    // Process the data
    const result = await processData(data);
    
    // Handle the result
    return result;
  } catch (error) {
    // Error handling
    console.error('Operation failed:', error);
    throw new Error('Failed to process data');
  }
}"##;

const JS_FUNCTION: &str = r##"// Here's an improved JavaScript function
function improvedFunction(param) {
  // Parameter validation
  if (param === undefined) {
    throw new Error('Parameter is required');
  }
  
  // Your logic here
  const result = processData(param);
  
  return result;
}

// Helper function
function processData(data) {
  return data;
}"##;

const JS_CLASS: &str = r##"// Here's a better class structure
class ImprovedClass {
  #privateData; // Private field

  constructor(initialData) {
    this.#privateData = initialData;
  }

  getData() {
    return this.#privateData;
  }

  setData(newData) {
    this.#privateData = newData;
  }
}

// Usage
const instance = new ImprovedClass('test');"##;

const HTML_DIV: &str = r##"<!-- Here's an improved HTML structure -->
<div class="container">
  <header class="header">
    <h1>Title</h1>
    <nav class="navigation">
      <ul>
        <li><a href="#home">Home</a></li>
        <li><a href="#about">About</a></li>
        <li><a href="#contact">Contact</a></li>
      </ul>
    </nav>
  </header>
  
  <main class="content">
    <section class="section">
      <h2>Section Title</h2>
      <p>Content goes here</p>
    </section>
  </main>
  
  <footer class="footer">
    <p>&copy; 2024 Your Company</p>
  </footer>
</div>"##;

const HTML_FORM: &str = r##"<!-- Here's an improved form structure -->
<form class="form" action="/submit" method="POST">
  <div class="form-group">
    <label for="name">Name:</label>
    <input 
      type="text" 
      id="name" 
      name="name" 
      required 
      class="form-control"
    >
  </div>
  
  <div class="form-group">
    <label for="email">Email:</label>
    <input 
      type="email" 
      id="email" 
      name="email" 
      required 
      class="form-control"
    >
  </div>
  
  <button type="submit" class="btn btn-primary">Submit</button>
</form>"##;

const CSS_CONTAINER: &str = r##"/* Here's an improved CSS structure */
.container {
  max-width: 1200px;
  margin: 0 auto;
  padding: 1rem;
}

@media (max-width: 768px) {
  .container {
    padding: 0.5rem;
  }
}

/* Modern CSS Reset */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

/* Responsive typography */
html {
  font-size: 16px;
}

@media (max-width: 768px) {
  html {
    font-size: 14px;
  }
}"##;

const CSS_MEDIA: &str = r##"/* Here's a better responsive design approach */
:root {
  --primary-color: #007bff;
  --secondary-color: #6c757d;
  --spacing-unit: 1rem;
}

/* Mobile first approach */
.responsive-element {
  width: 100%;
  padding: var(--spacing-unit);
}

/* Tablet */
@media (min-width: 768px) {
  .responsive-element {
    width: 50%;
  }
}

/* Desktop */
@media (min-width: 1024px) {
  .responsive-element {
    width: 33.333%;
  }
}

/* Large Desktop */
@media (min-width: 1200px) {
  .responsive-element {
    width: 25%;
  }
}"##;
