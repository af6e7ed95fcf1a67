/// Static introduction. Does not touch the dataset.
pub fn landing_body() -> String {
    LANDING.to_string()
}

const LANDING: &str = r#"<div class="columns">
<div>
<h2>About the Dataset</h2>
<p>State-wise counts of main and marginal workers across diverse industries, including manufacturing, construction, retail and more.</p>
<p>Explore the landscape of India's workforce by state, industry classification, area and sex.</p>
<p>Look for employment trends, industry distributions and economic patterns that can inform decisions and policy.</p>
</div>
<div>
<h2>About the Project</h2>
<p>The project aims to:</p>
<ul>
<li>Update and refine the industrial classification data of main and marginal workers.</li>
<li>Provide accurate information for policy-making and employment planning.</li>
<li>Give stakeholders insights that support economic growth and development.</li>
</ul>
<h2>Key Features</h2>
<ul>
<li><strong>Data Exploration:</strong> state-wise industrial classification data.</li>
<li><strong>Visualization:</strong> charts on the Overview page and a state map on the Explore page.</li>
<li><strong>Insights and Analysis:</strong> compare rural and urban workforces across industries and states.</li>
</ul>
</div>
</div>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_both_columns() {
        let body = landing_body();
        for heading in ["About the Dataset", "About the Project", "Key Features"] {
            assert!(body.contains(heading), "{heading}");
        }
    }
}
