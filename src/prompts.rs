//! Prompt templates for each pipeline stage
//!
//! Static instruction text parameterized by company and industry. Each stage
//! embeds an example or schema the downstream model is expected, but never
//! verified, to follow; the pipeline treats the final artifact as untrusted
//! text and checks only non-emptiness.

/// Markdown table skeleton shared by the table-producing stages
const TABLE_FORMAT: &str = "\
| Use Case | Description | Implementation Resources | Datasets & Code |
|----------|-------------|-------------------------|-----------------|
| [Use Case Name] | [2-3 sentences describing what problem this solves and its concrete benefits] | \u{2022} [Resource Name](URL) - Brief description<br>\u{2022} [Resource Name](URL) - Brief description | \u{2022} [Dataset Name](Kaggle/GitHub URL) - Dataset description<br>\u{2022} [Code Repository](GitHub URL) - Implementation details |";

/// Worked example row shared by the table-producing stages
const TABLE_EXAMPLE: &str = "\
| Use Case | Description | Implementation Resources | Datasets & Code |
|----------|-------------|-------------------------|-----------------|
| Predictive Maintenance | Enables early detection of potential equipment failures through real-time sensor data analysis. This proactive approach reduces downtime, extends equipment life, and optimizes maintenance schedules. | \u{2022} [NVIDIA AI-Powered Maintenance](https://developer.nvidia.com/blog/example) - Implementation guide<br>\u{2022} [AWS Implementation](https://aws.com/example) - Cloud deployment guide | \u{2022} [Industrial Maintenance Dataset](https://www.kaggle.com/datasets/example) - 10GB of sensor data<br>\u{2022} [Maintenance ML Models](https://github.com/example/maintenance) - Python implementation |";

/// Single-agent stage: the complete resource guide in one pass
pub fn resource_guide(company: &str, industry: &str) -> String {
    format!(
        "Create a comprehensive AI implementation resource guide for {company}.

YOUR TASK:
Generate 4 practical AI use cases with implementation resources and datasets specifically tailored for {company} in the {industry} industry.

FORMAT YOUR RESPONSE IN A MARKDOWN TABLE EXACTLY LIKE THIS:

{TABLE_FORMAT}

REQUIRED USE CASES:
1. One focused on {company}'s core business operations
2. One focused on customer experience enhancement
3. One focused on operational efficiency
4. One focused on innovation/R&D

EXAMPLE FORMAT:
{TABLE_EXAMPLE}

REQUIREMENTS:
1. Make each use case highly specific to {company}'s industry and needs
2. Focus on practical, implementable solutions
3. Provide real, accessible resources (Kaggle/GitHub/HuggingFace)
4. Include both implementation resources and datasets/code
5. Keep descriptions natural and benefits concrete
6. Ensure URLs are valid and resources are relevant

GENERATE FOUR USE CASES NOW IN THE EXACT TABLE FORMAT SPECIFIED ABOVE."
    )
}

pub fn resource_guide_expected_output() -> String {
    "AI implementation resources table with four specific use cases, \
     implementation guides, and datasets"
        .to_string()
}

/// Full-roster stage 1: identify the use cases
pub fn identify_use_cases(company: &str, industry: &str) -> String {
    format!(
        "Identify EXACTLY 4 high-impact AI use cases for {company}, a company in the {industry} industry.

REQUIRED COVERAGE:
1. One use case focused on {company}'s core business operations
2. One focused on customer experience enhancement
3. One focused on operational efficiency
4. One focused on innovation/R&D

For each use case provide:
- A short, specific name
- 2-3 sentences describing the problem it solves and its concrete benefits for {company}

Ground every use case in how the {industry} industry actually operates. Do not \
propose generic AI ideas that could apply to any company."
    )
}

pub fn identify_use_cases_expected_output() -> String {
    "A numbered list of exactly four named AI use cases, each with a 2-3 sentence \
     description tied to the company's industry"
        .to_string()
}

/// Full-roster stage 2: official implementation resources
pub fn implementation_resources(company: &str) -> String {
    format!(
        "Find OFFICIAL implementation RESOURCES for each of the four AI use cases \
identified for {company} in the previous step.

For EACH use case provide 2-3 resources:
- Vendor documentation, reference architectures, or deployment guides
- Prefer official sources (cloud providers, framework vendors, {company}'s own \
published engineering material where it exists)
- Format each as [Resource Name](URL) - brief description of what it covers

Keep the use case names from the previous step unchanged so the final table can \
be assembled without ambiguity."
    )
}

pub fn implementation_resources_expected_output() -> String {
    "For each of the four use cases, 2-3 linked official implementation resources \
     with one-line descriptions"
        .to_string()
}

/// Full-roster stage 3: datasets and code
pub fn datasets_and_code(company: &str) -> String {
    format!(
        "Find REAL DATASETS AND CODE for each of the four AI use cases identified \
for {company} in the earlier steps.

For EACH use case provide:
- 1-2 datasets (Kaggle, HuggingFace, or public portals) with a one-line description \
of size and content
- 1-2 code repositories (GitHub) with a one-line description of what they implement
- Format each as [Name](URL) - description

Only include resources that are publicly accessible. Keep the use case names from \
the previous steps unchanged."
    )
}

pub fn datasets_and_code_expected_output() -> String {
    "For each of the four use cases, linked public datasets and code repositories \
     with one-line descriptions"
        .to_string()
}

/// Full-roster stage 4: the combined final table
pub fn final_table(company: &str) -> String {
    format!(
        "Create ONE TABLE combining ALL FINDINGS from the previous steps for {company}.

FORMAT YOUR RESPONSE IN A MARKDOWN TABLE EXACTLY LIKE THIS:

{TABLE_FORMAT}

EXAMPLE FORMAT:
{TABLE_EXAMPLE}

REQUIREMENTS:
1. One row per use case, four rows total, using the use case names and \
descriptions from step 1
2. Implementation Resources column: the official resources from step 2
3. Datasets & Code column: the datasets and repositories from step 3
4. Separate multiple entries within a cell with <br>
5. Output ONLY the table, no surrounding commentary

GENERATE THE COMPLETE TABLE NOW."
    )
}

pub fn final_table_expected_output() -> String {
    "A single Markdown table with four rows combining use cases, descriptions, \
     implementation resources, and datasets"
        .to_string()
}
