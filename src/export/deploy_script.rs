//! PowerShell deployment script exporter
//!
//! The script is written next to the generated folders and deploys them with
//! the `Az.DataFactory` cmdlets, overwriting existing resources (`-Force`).
//! Linked services go first, then datasets, then pipelines, so references
//! resolve during deployment.

use super::ExportResult;
use crate::document::Resource;
use crate::document::dataset::DataSetDocument;
use crate::document::linked_service::LinkedServiceDocument;
use crate::document::pipeline::PipelineDocument;

/// File name of the generated script.
pub const DEPLOY_SCRIPT_FILE: &str = "deploy.ps1";

/// Default metadata file, relative to the project output folder.
pub const DEFAULT_METADATA_PATH: &str = r"..\..\..\..\Metadata\Model.json";

const HEADER: &str = r#"# Deployment script for Azure Data Factory project '{project}'.
# Existing resources with the same names are overwritten.

param(
    [string]$MetadataPath = "{metadata}"
)

$metadata = Get-Content -Raw -Path $MetadataPath | ConvertFrom-Json

$subscription = $metadata.DataWarehouse.AzureSubscriptionId
$tenantId = $metadata.DataWarehouse.AzureTenantId
$resourceGroup = $metadata.DataWarehouse.AzureResourceGroup
$dataFactoryName = $metadata.DataWarehouse.AzureDataFactoryName

### Authenticate ###
$null = Connect-AzAccount -Tenant $tenantId -Subscription $subscription
$dataFactory = Get-AzDataFactoryV2 -ResourceGroupName $resourceGroup -Name $dataFactoryName -ErrorAction SilentlyContinue
$absJsonPath = $PSScriptRoot | Resolve-Path

""
"You are deploying the following:"
"Subscription: $($subscription)"
"ResourceGroup: $($resourceGroup)"
"DataFactory: $($dataFactoryName)"
"TenantId: $($tenantId)"
"Using .json files at $($absJsonPath)"
$entry = Read-Host -Prompt "Do you wish to continue? (y/n)"

if ($entry -notmatch '^[yY]$') {
    Return
}

if ($null -eq $dataFactory) {
    "Data factory $dataFactoryName does not exist, deploy it before running this script."
    Return
}
"#;

const SECTION: &str = r#"
""
"- Deploying {folder} -"
$dir = Join-Path $absJsonPath "{folder}"
if (Test-Path $dir) {
    foreach ($file in Get-ChildItem $dir -Filter *.json) {
        $json = Get-Content -Raw -Path $file.FullName | ConvertFrom-Json
        "Deploying $($json.name)..."
        try {
            $null = {cmdlet} -ResourceGroupName $resourceGroup -DataFactoryName $dataFactoryName -Name $json.name -DefinitionFile $file.FullName -Force
        }
        catch {
            "$($_)"
            Return
        }
    }
}
"#;

const FOOTER: &str = r#"
""
Read-Host -Prompt "Deployment complete! Press enter to exit"
"#;

/// PowerShell deployment script exporter
pub struct DeployScriptExporter {
    metadata_path: String,
}

impl Default for DeployScriptExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DeployScriptExporter {
    pub fn new() -> Self {
        Self {
            metadata_path: DEFAULT_METADATA_PATH.to_string(),
        }
    }

    /// Override the default metadata file path baked into the script.
    pub fn with_metadata_path(mut self, path: impl Into<String>) -> Self {
        self.metadata_path = path.into();
        self
    }

    /// Render the deployment script for a project.
    ///
    /// # Example
    ///
    /// ```rust
    /// use adf_codegen::export::DeployScriptExporter;
    ///
    /// let script = DeployScriptExporter::new().export("SalesFactory");
    /// assert_eq!(script.format, "ps1");
    /// assert!(script.content.contains("Set-AzDataFactoryV2Pipeline"));
    /// ```
    pub fn export(&self, project_name: &str) -> ExportResult {
        let mut content = HEADER
            .replace("{project}", project_name)
            .replace("{metadata}", &self.metadata_path);

        for (folder, cmdlet) in [
            (LinkedServiceDocument::FOLDER, "Set-AzDataFactoryV2LinkedService"),
            (DataSetDocument::FOLDER, "Set-AzDataFactoryV2Dataset"),
            (PipelineDocument::FOLDER, "Set-AzDataFactoryV2Pipeline"),
        ] {
            content.push_str(&SECTION.replace("{folder}", folder).replace("{cmdlet}", cmdlet));
        }
        content.push_str(FOOTER);

        ExportResult {
            content,
            format: "ps1".to_string(),
        }
    }
}
